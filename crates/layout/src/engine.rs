use crate::cursor::Cursor;
use crate::labels;
use vitae_model::{Education, Resume, WorkExperience};
use vitae_render_core::{PaintMode, Surface};
use vitae_style::Theme;
use vitae_types::{Color, Rect};

/// Height of the background accent band across the top of the first page.
const ACCENT_BAND_HEIGHT: f32 = 100.0;
/// A page break fires once the cursor passes this close to the bottom edge.
const BOTTOM_BREAK_ZONE: f32 = 100.0;
/// Inset applied to text inside bordered sections.
const BORDER_PADDING: f32 = 10.0;
/// Extra indent for detail lines (responsibilities, faculty, study form).
const DETAIL_INDENT: f32 = 10.0;
const COLUMN_GAP: f32 = 20.0;
const LEFT_COLUMN_SHARE: f32 = 0.35;
const RIGHT_COLUMN_SHARE: f32 = 0.55;
/// Fixed column frame heights in two-column mode; not sized to content.
const LEFT_BORDER_HEIGHT: f32 = 350.0;
const RIGHT_BORDER_HEIGHT: f32 = 450.0;

/// Lays a résumé out onto a drawing surface according to one theme.
///
/// The engine holds no mutable state of its own; cursors are created per
/// render, so a single engine value may serve concurrent renders over
/// separate surfaces.
pub struct LayoutEngine<'a> {
    theme: &'a Theme,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Render `resume` onto `surface`. `photo` carries the raw bytes
    /// resolved from the résumé's photo key, if any; undecodable bytes are
    /// logged and skipped, never fatal.
    pub fn render<S: Surface>(&self, resume: &Resume, photo: Option<&[u8]>, surface: &mut S) {
        Pass {
            theme: self.theme,
            resume,
            surface,
        }
        .run(photo);
    }
}

/// State for a single render: one theme, one résumé, one surface.
struct Pass<'a, S: Surface> {
    theme: &'a Theme,
    resume: &'a Resume,
    surface: &'a mut S,
}

impl<'a, S: Surface> Pass<'a, S> {
    fn run(mut self, photo: Option<&[u8]>) {
        let mut cursor = Cursor::new(self.theme.margins.top);

        if self.theme.decorations.background_accent {
            self.draw_accent_band();
        }
        if let Some(bytes) = photo {
            self.place_photo(bytes, &mut cursor);
        }
        self.draw_header(&mut cursor);

        if self.theme.two_columns {
            self.two_column_body(cursor.y());
        } else {
            self.single_column_body(cursor);
        }
    }

    fn page_width(&self) -> f32 {
        self.surface.page_size().width
    }

    fn page_height(&self) -> f32 {
        self.surface.page_size().height
    }

    fn spacing(&self) -> f32 {
        self.theme.line_spacing
    }

    fn border_padding(&self) -> f32 {
        if self.theme.decorations.section_borders {
            BORDER_PADDING
        } else {
            0.0
        }
    }

    fn use_body_text(&mut self) {
        self.surface.set_font(&self.theme.body_font);
        self.surface.set_fill_color(self.theme.text_color);
    }

    /// Draw one line of body text with its baseline one line spacing below
    /// the cursor, then advance the cursor by one spacing.
    fn write_line(&mut self, x: f32, cursor: &mut Cursor, text: &str) {
        self.surface.draw_text(x, cursor.y() + self.spacing(), text);
        cursor.advance(self.spacing());
    }

    fn section_title(&mut self, x: f32, cursor: &mut Cursor, title: &str) {
        self.surface.set_font(&self.theme.section_font);
        self.surface.set_fill_color(self.theme.title_color);
        self.write_line(x, cursor, title);
    }

    fn draw_accent_band(&mut self) {
        self.surface
            .set_fill_color(self.theme.decorations.accent_color);
        self.surface.draw_rect(
            Rect::new(0.0, 0.0, self.page_width(), ACCENT_BAND_HEIGHT),
            PaintMode::Fill,
        );
        self.surface.set_fill_color(self.theme.text_color);
    }

    fn place_photo(&mut self, bytes: &[u8], cursor: &mut Cursor) {
        let photo = self.theme.photo;
        // With an accent band the photo is centered on the band edge;
        // otherwise it hangs from the top margin by its configured offset.
        let top = if self.theme.decorations.background_accent {
            ACCENT_BAND_HEIGHT - photo.height / 2.0
        } else {
            photo.offset_y + self.theme.margins.top
        };
        let frame = Rect::new(photo.offset_x, top, photo.width, photo.height);

        let drawn = if photo.circular {
            let radius = photo.width.min(photo.height) / 2.0;
            let cx = frame.x + frame.width / 2.0;
            let cy = frame.y + frame.height / 2.0;
            self.surface.save_state();
            self.surface.set_fill_color(Color::WHITE);
            self.surface
                .set_stroke_color(self.theme.decorations.rule_color);
            self.surface.set_line_width(1.0);
            self.surface
                .draw_circle(cx, cy, radius, PaintMode::FillStroke);
            self.surface.clip_circle(cx, cy, radius);
            let result = self.surface.draw_image(frame, bytes);
            self.surface.restore_state();
            result
        } else {
            self.surface.set_fill_color(Color::WHITE);
            self.surface
                .set_stroke_color(self.theme.decorations.rule_color);
            self.surface.set_line_width(1.0);
            self.surface.draw_rect(frame, PaintMode::FillStroke);
            self.surface.draw_image(frame, bytes)
        };

        match drawn {
            // Subsequent text must clear the photo's bottom edge.
            Ok(()) => cursor.reset(frame.bottom() + self.theme.margins.top),
            Err(e) => log::warn!("skipping photo: {e}"),
        }
    }

    fn draw_header(&mut self, cursor: &mut Cursor) {
        self.surface.set_font(&self.theme.title_font);
        self.surface.set_fill_color(self.theme.title_color);
        self.surface.draw_text(
            self.theme.margins.left,
            cursor.y(),
            &self.resume.full_name(),
        );
        cursor.advance(self.spacing() * 2.0);

        if self.theme.decorations.header_rule {
            self.surface
                .set_stroke_color(self.theme.decorations.rule_color);
            self.surface
                .set_line_width(self.theme.decorations.rule_width);
            self.surface.draw_line(
                self.theme.margins.left,
                cursor.y(),
                self.page_width() - self.theme.margins.right,
                cursor.y(),
            );
            self.surface.set_stroke_color(self.theme.text_color);
        }

        // Body content must clear the accent band and header decorations.
        cursor.clamp_below(ACCENT_BAND_HEIGHT + self.spacing());
    }

    // --- Single-column mode -------------------------------------------------

    fn single_column_body(&mut self, mut cursor: Cursor) {
        let resume = self.resume;
        let pad = self.border_padding();
        let x = self.theme.margins.left + pad;
        let spacing = self.spacing();

        cursor.advance(spacing);

        // Main information
        let mut section_start = cursor.y();
        self.section_title(x, &mut cursor, labels::MAIN_INFO);
        self.use_body_text();
        if let Some(middle) = &resume.middle_name {
            self.write_line(x, &mut cursor, &format!("Отчество: {middle}"));
        }
        if let Some(birth) = resume.birth_date {
            self.write_line(
                x,
                &mut cursor,
                &format!("Дата рождения: {}", labels::birth_date(birth)),
            );
        }
        if let Some(phone) = &resume.phone_number {
            self.write_line(x, &mut cursor, &format!("Телефон: {phone}"));
        }
        if let Some(email) = &resume.email {
            self.write_line(x, &mut cursor, &format!("Email: {email}"));
        }
        self.write_line(x, &mut cursor, &format!("Должность: {}", resume.position));
        if let Some(employment) = &resume.employment {
            self.write_line(x, &mut cursor, &format!("Занятость: {employment}"));
        }
        if let Some(salary) = resume.desired_salary {
            self.write_line(x, &mut cursor, &format!("Зарплата: {salary} руб."));
        }
        if let Some(schedule) = &resume.work_schedule {
            self.write_line(x, &mut cursor, &format!("График: {schedule}"));
        }
        self.write_line(
            x,
            &mut cursor,
            &format!(
                "Командировки: {}",
                labels::yes_no(resume.is_ready_for_trips.unwrap_or(false))
            ),
        );
        self.close_section_border(section_start, cursor.y());

        cursor.advance(spacing);

        // Personal information
        section_start = cursor.y();
        self.section_title(x, &mut cursor, labels::PERSONAL_INFO);
        self.use_body_text();
        self.personal_lines(x, &mut cursor);
        self.close_section_border(section_start, cursor.y());

        cursor.advance(spacing);

        if self.breakpoint_reached(&cursor) {
            self.start_new_page(&mut cursor);
        }

        if !resume.work_experiences.is_empty() {
            let mut section_start = cursor.y();
            self.section_title(x, &mut cursor, labels::WORK_EXPERIENCE);
            self.use_body_text();

            for entry in &resume.work_experiences {
                self.work_entry(x, &mut cursor, entry);
                if self.breakpoint_reached(&cursor) {
                    self.close_section_border(section_start, cursor.y());
                    self.start_new_page(&mut cursor);
                    section_start = cursor.y();
                }
            }
            self.close_section_border(section_start, cursor.y());
            cursor.advance(spacing);
        }

        if !resume.educations.is_empty() {
            let mut section_start = cursor.y();
            self.section_title(x, &mut cursor, labels::EDUCATION);
            self.use_body_text();

            let last = resume.educations.len() - 1;
            for (index, entry) in resume.educations.iter().enumerate() {
                self.education_entry(x, &mut cursor, entry);
                // The last entry never triggers a break; it would only
                // produce a trailing blank page.
                if index != last && self.breakpoint_reached(&cursor) {
                    self.close_section_border(section_start, cursor.y());
                    self.start_new_page(&mut cursor);
                    section_start = cursor.y();
                }
            }
            self.close_section_border(section_start, cursor.y());
            cursor.advance(spacing);
        }
    }

    // --- Two-column mode ----------------------------------------------------

    /// Two-column bodies assume everything fits on one page; there is no
    /// pagination here.
    fn two_column_body(&mut self, top: f32) {
        let resume = self.resume;
        let pad = self.border_padding();
        let spacing = self.spacing();
        let content_width = self.theme.content_width(self.page_width());
        let left_width = content_width * LEFT_COLUMN_SHARE;
        let right_width = content_width * RIGHT_COLUMN_SHARE;
        let left_x = self.theme.margins.left;
        let right_x = self.theme.margins.left + left_width + COLUMN_GAP;

        // Left column: contacts, then personal information.
        let mut left = Cursor::new(top);
        self.column_border(left_x, top, left_width, LEFT_BORDER_HEIGHT);

        self.section_title(left_x + pad, &mut left, labels::CONTACTS);
        self.use_body_text();
        if let Some(phone) = &resume.phone_number {
            self.write_line(left_x + pad, &mut left, &format!("Телефон: {phone}"));
        }
        if let Some(email) = &resume.email {
            self.write_line(left_x + pad, &mut left, &format!("Email: {email}"));
        }
        left.advance(spacing);

        self.section_title(left_x + pad, &mut left, labels::PERSONAL_INFO);
        self.use_body_text();
        self.personal_lines(left_x + pad, &mut left);

        // Right column: main information, work experience, education.
        let mut right = Cursor::new(top);
        self.column_border(right_x, top, right_width, RIGHT_BORDER_HEIGHT);

        self.section_title(right_x + pad, &mut right, labels::MAIN_INFO);
        self.use_body_text();
        self.write_line(
            right_x + pad,
            &mut right,
            &format!("Должность: {}", resume.position),
        );
        if let Some(birth) = resume.birth_date {
            self.write_line(
                right_x + pad,
                &mut right,
                &format!("Дата рождения: {}", labels::birth_date(birth)),
            );
        }
        if let Some(employment) = &resume.employment {
            self.write_line(
                right_x + pad,
                &mut right,
                &format!("Занятость: {employment}"),
            );
        }
        if let Some(salary) = resume.desired_salary {
            self.write_line(
                right_x + pad,
                &mut right,
                &format!("Зарплата: {salary} руб."),
            );
        }
        if let Some(schedule) = &resume.work_schedule {
            self.write_line(right_x + pad, &mut right, &format!("График: {schedule}"));
        }
        if let Some(ready) = resume.is_ready_for_trips {
            self.write_line(
                right_x + pad,
                &mut right,
                &format!("Командировки: {}", labels::yes_no(ready)),
            );
        }
        right.advance(spacing);

        if !resume.work_experiences.is_empty() {
            self.section_title(right_x + pad, &mut right, labels::WORK_EXPERIENCE);
            self.use_body_text();
            for entry in &resume.work_experiences {
                self.work_entry(right_x + pad, &mut right, entry);
            }
            right.advance(spacing);
        }

        if !resume.educations.is_empty() {
            self.section_title(right_x + pad, &mut right, labels::EDUCATION);
            self.use_body_text();
            for entry in &resume.educations {
                self.education_entry(right_x + pad, &mut right, entry);
            }
        }
    }

    // --- Shared pieces ------------------------------------------------------

    /// The personal-information field list, identical in both modes.
    fn personal_lines(&mut self, x: f32, cursor: &mut Cursor) {
        let resume = self.resume;
        self.write_line(x, cursor, &format!("Город: {}", resume.city));
        self.write_line(
            x,
            cursor,
            &format!(
                "Готов к переезду: {}",
                labels::yes_no(resume.can_relocate.unwrap_or(false))
            ),
        );
        if let Some(citizenship) = &resume.citizenship {
            self.write_line(x, cursor, &format!("Гражданство: {citizenship}"));
        }
        if let Some(gender) = &resume.gender {
            self.write_line(x, cursor, &format!("Пол: {gender}"));
        }
        self.write_line(
            x,
            cursor,
            &format!("Дети: {}", labels::has_no(resume.has_children.unwrap_or(false))),
        );
        if let Some(languages) = &resume.languages {
            self.write_line(x, cursor, &format!("Языки: {languages}"));
        }
        if let Some(licenses) = &resume.driver_licenses {
            self.write_line(x, cursor, &format!("Вод. права: {licenses}"));
        }
        self.write_line(
            x,
            cursor,
            &format!(
                "Мед. книжка: {}",
                labels::has_no(resume.has_medical_book.unwrap_or(false))
            ),
        );
        if let Some(qualities) = &resume.personal_qualities {
            self.write_line(x, cursor, &format!("Качества: {qualities}"));
        }
    }

    fn work_entry(&mut self, x: f32, cursor: &mut Cursor, entry: &WorkExperience) {
        let heading = format!(
            "{} - {} ({})",
            entry.organization,
            entry.position,
            labels::work_period(entry)
        );
        self.write_line(x, cursor, &heading);
        if let Some(responsibilities) = &entry.responsibilities {
            self.surface.draw_text(
                x + DETAIL_INDENT,
                cursor.y() + self.spacing(),
                responsibilities,
            );
            cursor.advance(self.spacing() * 1.5);
        }
        cursor.advance(self.spacing() * 0.5);
    }

    fn education_entry(&mut self, x: f32, cursor: &mut Cursor, entry: &Education) {
        self.write_line(
            x,
            cursor,
            &format!(
                "{} - {} ({})",
                entry.institution, entry.specialty, entry.graduation_year
            ),
        );
        if let Some(faculty) = &entry.faculty {
            self.write_line(x + DETAIL_INDENT, cursor, &format!("Факультет: {faculty}"));
        }
        if let Some(form) = &entry.study_form {
            self.write_line(
                x + DETAIL_INDENT,
                cursor,
                &format!("Форма обучения: {form}"),
            );
        }
        cursor.advance(self.spacing() * 0.5);
    }

    /// Outline a finished single-column section, sized to the vertical
    /// extent it actually consumed.
    fn close_section_border(&mut self, start_y: f32, end_y: f32) {
        if !self.theme.decorations.section_borders {
            return;
        }
        let height = end_y - start_y + BORDER_PADDING;
        if height <= 0.0 {
            return;
        }
        self.surface
            .set_stroke_color(self.theme.decorations.border_color);
        self.surface.draw_rect(
            Rect::new(
                self.theme.margins.left,
                start_y,
                self.theme.content_width(self.page_width()),
                height,
            ),
            PaintMode::Stroke,
        );
        self.surface.set_stroke_color(self.theme.text_color);
    }

    fn column_border(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if !self.theme.decorations.section_borders {
            return;
        }
        self.surface
            .set_stroke_color(self.theme.decorations.border_color);
        self.surface
            .draw_rect(Rect::new(x, y, width, height), PaintMode::Stroke);
        self.surface.set_stroke_color(self.theme.text_color);
    }

    fn breakpoint_reached(&self, cursor: &Cursor) -> bool {
        cursor.past(self.page_height() - BOTTOM_BREAK_ZONE)
    }

    fn start_new_page(&mut self, cursor: &mut Cursor) {
        self.surface.new_page();
        cursor.reset(self.theme.margins.top);
        self.use_body_text();
    }
}
