//! Markup for the experience timeline, rebuilt from the catalog on every
//! language switch.

use html_escape::encode_text;

use crate::i18n::{Catalog, Job};

fn render_card(out: &mut String, job: &Job, at: &str) {
    out.push_str(&format!(
        concat!(
            r#"<div class="experience-card relative">"#,
            r#"<div class="flex items-start gap-4">"#,
            r#"<div class="flex-shrink-0 w-2 h-2 rounded-full mt-2" style="background-color: var(--color-primary)"></div>"#,
            r#"<div class="flex-grow">"#,
            r#"<div class="flex flex-wrap items-center gap-2 mb-2">"#,
            r#"<h3 class="text-xl font-semibold text-primary">{position}</h3>"#,
            r#"<span class="text-secondary">{at}</span>"#,
            r#"<span class="font-medium" style="color: var(--color-primary)">{company}</span>"#,
            r#"</div>"#,
            r#"<div class="text-sm text-secondary mb-3">{start} - {end}</div>"#,
            r#"<p class="text-secondary mb-4">{description}</p>"#,
            r#"<div class="flex flex-wrap gap-2">"#,
        ),
        position = encode_text(&job.position),
        at = encode_text(at),
        company = encode_text(&job.company),
        start = encode_text(&job.start_date),
        end = encode_text(&job.end_date),
        description = encode_text(&job.description),
    ));
    for tech in &job.technologies {
        out.push_str(&format!(
            r#"<span class="tech-tag inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium">{}</span>"#,
            encode_text(tech)
        ));
    }
    out.push_str("</div></div></div></div>");
}

/// One card per job, in catalog order.
pub fn render_experience_cards(catalog: &Catalog) -> String {
    let at = &catalog.resource().experience.at;
    let mut out = String::new();
    for job in catalog.jobs() {
        render_card(&mut out, job, at);
    }
    out
}
