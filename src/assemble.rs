//! Appends the résumé content to a `Doc` in the fixed authored order:
//! header, summary, experience, a forced page break, then skills,
//! education and projects. All ordering comes straight from the content
//! tables; nothing is sorted or filtered here.

use log::debug;

use crate::content::Resume;
use crate::types::{Block, Doc, PageGeometry, Span, StyleSheet};

const INCH: f32 = 72.0;

/// builds the complete block sequence for one résumé
pub fn assemble(resume: &Resume, styles: &StyleSheet) -> Doc {
    let mut doc = Doc::new(PageGeometry::default());

    // header
    doc = doc
        .block(Block::paragraph(resume.name.as_str(), &styles.title))
        .block(Block::paragraph(resume.role.as_str(), &styles.body))
        .block(Block::Spacer(0.1 * INCH))
        .block(Block::paragraph(resume.contact.as_str(), &styles.body))
        .block(Block::Spacer(0.15 * INCH));

    // summary
    doc = doc
        .block(Block::paragraph("PROFESSIONAL SUMMARY", &styles.heading))
        .block(Block::paragraph(resume.summary.as_str(), &styles.body))
        .block(Block::Spacer(0.1 * INCH));

    // experience, in authored order
    doc = doc.block(Block::paragraph("PROFESSIONAL EXPERIENCE", &styles.heading));

    for entry in &resume.experience {
        doc = doc
            .block(Block::paragraph(entry.title.as_str(), &styles.job_title))
            .block(Block::paragraph(
                format!("{} | {}", entry.period, entry.location),
                &styles.job_meta,
            ));

        for bullet in &entry.bullets {
            doc = doc.block(Block::paragraph(format!("• {bullet}"), &styles.bullet));
        }

        doc = doc.block(Block::Spacer(0.05 * INCH));
    }

    // the skills section always opens a fresh page
    doc = doc.block(Block::PageBreak);

    // skills
    doc = doc.block(Block::paragraph("TECHNICAL SKILLS", &styles.heading));

    for category in &resume.skills {
        doc = doc
            .block(Block::rich(
                vec![
                    Span::bold(format!("{}:", category.label)),
                    Span::plain(format!(" {}", category.description)),
                ],
                &styles.body,
            ))
            .block(Block::Spacer(0.05 * INCH));
    }

    doc = doc.block(Block::Spacer(0.1 * INCH));

    // education
    doc = doc.block(Block::paragraph("EDUCATION & CERTIFICATIONS", &styles.heading));

    for entry in &resume.education {
        doc = doc
            .block(Block::rich(
                vec![
                    Span::bold(entry.school.as_str()),
                    Span::plain(format!(" — {} ({})", entry.program, entry.period)),
                ],
                &styles.body,
            ))
            .block(Block::Spacer(0.03 * INCH));
    }

    doc = doc.block(Block::Spacer(0.1 * INCH));

    // projects
    doc = doc.block(Block::paragraph("KEY PROJECTS", &styles.heading));

    for project in &resume.projects {
        doc = doc
            .block(Block::rich(
                vec![
                    Span::bold(format!("{}:", project.name)),
                    Span::plain(format!(" {}", project.description)),
                ],
                &styles.body,
            ))
            .block(Block::Spacer(0.04 * INCH));
    }

    debug!("assembled {} blocks", doc.blocks().len());

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::types::Block;

    fn assembled() -> Doc {
        assemble(&content::resume(), &StyleSheet::default())
    }

    fn paragraph_texts(doc: &Doc) -> Vec<String> {
        doc.blocks()
            .iter()
            .filter(|block| matches!(block, Block::Paragraph { .. }))
            .map(|block| block.text())
            .collect()
    }

    #[test]
    fn exactly_one_page_break_right_before_skills() {
        let doc = assembled();
        let breaks: Vec<usize> = doc
            .blocks()
            .iter()
            .enumerate()
            .filter(|(_, block)| matches!(block, Block::PageBreak))
            .map(|(index, _)| index)
            .collect();

        assert_eq!(breaks.len(), 1);
        assert_eq!(
            doc.blocks()[breaks[0] + 1].text(),
            "TECHNICAL SKILLS",
            "the block after the break must be the skills heading"
        );
    }

    #[test]
    fn one_bullet_paragraph_per_authored_bullet() {
        let resume = content::resume();
        let doc = assembled();
        let texts = paragraph_texts(&doc);

        let authored: usize = resume.experience.iter().map(|e| e.bullets.len()).sum();
        let rendered = texts.iter().filter(|text| text.starts_with("• ")).count();

        assert_eq!(rendered, authored);
    }

    #[test]
    fn experience_entries_keep_authored_order_and_shape() {
        let resume = content::resume();
        let doc = assembled();
        let texts = paragraph_texts(&doc);

        let mut cursor = 0;
        for entry in &resume.experience {
            let title_at = texts[cursor..]
                .iter()
                .position(|text| text == &entry.title)
                .map(|found| cursor + found)
                .expect("job title paragraph present, in order");

            assert_eq!(
                texts[title_at + 1],
                format!("{} | {}", entry.period, entry.location)
            );

            for (offset, bullet) in entry.bullets.iter().enumerate() {
                assert_eq!(texts[title_at + 2 + offset], format!("• {bullet}"));
            }

            cursor = title_at + 1;
        }
    }

    #[test]
    fn one_combined_paragraph_per_skill_education_and_project() {
        let resume = content::resume();
        let doc = assembled();
        let texts = paragraph_texts(&doc);

        let skills: Vec<String> = resume
            .skills
            .iter()
            .map(|c| format!("{}: {}", c.label, c.description))
            .collect();
        let education: Vec<String> = resume
            .education
            .iter()
            .map(|e| format!("{} — {} ({})", e.school, e.program, e.period))
            .collect();
        let projects: Vec<String> = resume
            .projects
            .iter()
            .map(|p| format!("{}: {}", p.name, p.description))
            .collect();

        for expected in [&skills, &education, &projects] {
            let positions: Vec<usize> = expected
                .iter()
                .map(|line| {
                    texts
                        .iter()
                        .position(|text| text == line)
                        .unwrap_or_else(|| panic!("missing combined paragraph: {line}"))
                })
                .collect();

            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted, "combined paragraphs out of authored order");
        }
    }

    #[test]
    fn header_comes_first() {
        let doc = assembled();
        let texts = paragraph_texts(&doc);

        assert_eq!(texts[0], "Wendeel Marinho");
        assert!(texts[1].starts_with("CTO"));
        assert!(texts[2].contains("wendeelmarinho@gmail.com"));
    }
}
