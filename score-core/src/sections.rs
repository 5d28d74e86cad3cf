use score_types::{PointEvent, SectionRecord, Side};
use tracing::debug;

/// Turn stored rally sections into scoring events. Sections without a
/// recorded winner are scored for `default_winner`.
pub fn events_from_sections(sections: &[SectionRecord], default_winner: Side) -> Vec<PointEvent> {
    let defaulted = sections
        .iter()
        .filter(|section| section.point_winner().is_none())
        .count();
    if defaulted > 0 {
        debug!(
            defaulted,
            total = sections.len(),
            ?default_winner,
            "Sections without a point winner scored for default side"
        );
    }

    sections
        .iter()
        .map(|section| PointEvent::from_section(section, default_winner))
        .collect()
}
