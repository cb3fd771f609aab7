/// One of the four Helvetica faces registered with the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
    Oblique,
    BoldOblique,
}

impl Face {
    /// index into the writer's font reference table
    pub fn index(self) -> usize {
        match self {
            Face::Regular => 0,
            Face::Bold => 1,
            Face::Oblique => 2,
            Face::BoldOblique => 3,
        }
    }
}

/// RGB fill color, each channel in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };

    /// builds a color from 8-bit channels, e.g. `Color::rgb8(0x1f, 0x6f, 0xeb)`
    pub fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// An immutable set of paragraph rendering attributes. All distances are in
/// PDF points. `leading` is the baseline-to-baseline line height.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub face: Face,
    pub size: f32,
    pub color: Color,
    pub leading: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub left_indent: f32,
    pub alignment: Alignment,
}

impl Style {
    /// Value composition: returns a new `Style` with every `Some` field of
    /// the override replacing the base attribute. When the override changes
    /// the size without pinning a leading, the leading is re-derived as
    /// 1.2 x size.
    pub fn apply(&self, overrides: StyleOverride) -> Style {
        let size = overrides.size.unwrap_or(self.size);
        let leading = match overrides.leading {
            Some(leading) => leading,
            None if overrides.size.is_some() => size * 1.2,
            None => self.leading,
        };

        Style {
            face: overrides.face.unwrap_or(self.face),
            size,
            color: overrides.color.unwrap_or(self.color),
            leading,
            space_before: overrides.space_before.unwrap_or(self.space_before),
            space_after: overrides.space_after.unwrap_or(self.space_after),
            left_indent: overrides.left_indent.unwrap_or(self.left_indent),
            alignment: overrides.alignment.unwrap_or(self.alignment),
        }
    }
}

/// Partial style record used to derive one style from another.
#[derive(Debug, Clone, Default)]
pub struct StyleOverride {
    pub face: Option<Face>,
    pub size: Option<f32>,
    pub color: Option<Color>,
    pub leading: Option<f32>,
    pub space_before: Option<f32>,
    pub space_after: Option<f32>,
    pub left_indent: Option<f32>,
    pub alignment: Option<Alignment>,
}

/// The six named styles the résumé is typeset with, all derived from one
/// base body style by attribute override.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    pub title: Style,
    pub heading: Style,
    pub job_title: Style,
    pub job_meta: Style,
    pub bullet: Style,
    pub body: Style,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let accent = Color::rgb8(0x1f, 0x6f, 0xeb);
        let muted = Color::rgb8(0x44, 0x55, 0x66);

        let body = Style {
            face: Face::Regular,
            size: 10.0,
            color: Color::BLACK,
            leading: 12.0,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            alignment: Alignment::Left,
        };

        let title = body.apply(StyleOverride {
            face: Some(Face::Bold),
            size: Some(24.0),
            color: Some(accent),
            space_after: Some(6.0),
            alignment: Some(Alignment::Center),
            ..StyleOverride::default()
        });

        let heading = body.apply(StyleOverride {
            face: Some(Face::Bold),
            size: Some(12.0),
            color: Some(accent),
            space_before: Some(10.0),
            space_after: Some(8.0),
            ..StyleOverride::default()
        });

        let job_title = body.apply(StyleOverride {
            face: Some(Face::Bold),
            size: Some(11.0),
            space_after: Some(2.0),
            ..StyleOverride::default()
        });

        let job_meta = body.apply(StyleOverride {
            face: Some(Face::Oblique),
            size: Some(9.0),
            color: Some(muted),
            space_after: Some(4.0),
            ..StyleOverride::default()
        });

        let bullet = body.apply(StyleOverride {
            size: Some(9.0),
            space_after: Some(3.0),
            left_indent: Some(20.0),
            ..StyleOverride::default()
        });

        StyleSheet {
            title,
            heading,
            job_title,
            job_meta,
            bullet,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_replaces_only_set_fields() {
        let base = StyleSheet::default().body;
        let derived = base.apply(StyleOverride {
            face: Some(Face::Bold),
            color: Some(Color::rgb8(255, 0, 0)),
            ..StyleOverride::default()
        });

        assert_eq!(derived.face, Face::Bold);
        assert_eq!(derived.color, Color::rgb8(255, 0, 0));
        assert_eq!(derived.size, base.size);
        assert_eq!(derived.leading, base.leading);
        assert_eq!(derived.alignment, base.alignment);
    }

    #[test]
    fn size_override_rederives_leading() {
        let base = StyleSheet::default().body;
        let derived = base.apply(StyleOverride {
            size: Some(20.0),
            ..StyleOverride::default()
        });

        assert_eq!(derived.size, 20.0);
        assert_eq!(derived.leading, 24.0);
    }

    #[test]
    fn explicit_leading_wins_over_derived() {
        let base = StyleSheet::default().body;
        let derived = base.apply(StyleOverride {
            size: Some(20.0),
            leading: Some(21.0),
            ..StyleOverride::default()
        });

        assert_eq!(derived.leading, 21.0);
    }

    #[test]
    fn stylesheet_matches_authored_typography() {
        let styles = StyleSheet::default();

        assert_eq!(styles.title.size, 24.0);
        assert_eq!(styles.title.alignment, Alignment::Center);
        assert_eq!(styles.heading.color, Color::rgb8(0x1f, 0x6f, 0xeb));
        assert_eq!(styles.heading.space_before, 10.0);
        assert_eq!(styles.job_meta.face, Face::Oblique);
        assert_eq!(styles.bullet.left_indent, 20.0);
        assert_eq!(styles.bullet.face, Face::Regular);
        assert_eq!(styles.body.size, 10.0);
    }
}
