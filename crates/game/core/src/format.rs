//! Human-readable tag summaries.

use core::fmt::Write as _;

use crate::state::{Tag, TagType};

/// Per-type tag counts, the input of every summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TagCounts {
    counts: [usize; TagType::ALL.len()],
}

impl TagCounts {
    pub fn from_tags(tags: &[Tag]) -> Self {
        let mut counts = Self::default();
        for tag in tags {
            counts.counts[tag.tag_type as usize] += 1;
        }
        counts
    }

    pub fn get(&self, tag_type: TagType) -> usize {
        self.counts[tag_type as usize]
    }
}

/// Summarizes a tag list, e.g. `"Damage 2, Ranged, AOE 1"`.
///
/// Categories always appear in [`TagType::ALL`] order regardless of the
/// order tags were added. Ranged and Immobilize are listed without a count;
/// the others carry one. An empty list yields an empty string.
pub fn format_tags(tags: &[Tag]) -> String {
    let counts = TagCounts::from_tags(tags);
    let mut summary = String::new();

    for tag_type in TagType::ALL {
        let count = counts.get(tag_type);
        if count == 0 {
            continue;
        }

        if !summary.is_empty() {
            summary.push_str(", ");
        }

        if tag_type.is_unique() {
            let _ = write!(summary, "{tag_type}");
        } else {
            let _ = write!(summary, "{tag_type} {count}");
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TagCost;

    fn tag(tag_type: TagType) -> Tag {
        Tag::new(tag_type, TagCost::FREE)
    }

    #[test]
    fn empty_list_is_empty_string() {
        assert_eq!(format_tags(&[]), "");
    }

    #[test]
    fn lists_every_category() {
        let tags = [
            tag(TagType::Damage),
            tag(TagType::Damage),
            tag(TagType::Ranged),
            tag(TagType::Aoe),
            tag(TagType::Immobilize),
            tag(TagType::CooldownReduction),
            tag(TagType::CooldownReduction),
            tag(TagType::CooldownReduction),
        ];
        assert_eq!(
            format_tags(&tags),
            "Damage 2, Ranged, AOE 1, Immobilize, Cooldown Reduction 3"
        );
    }

    #[test]
    fn order_is_fixed_regardless_of_input_order() {
        let forward = [tag(TagType::Damage), tag(TagType::Aoe), tag(TagType::Ranged)];
        let backward = [tag(TagType::Ranged), tag(TagType::Aoe), tag(TagType::Damage)];
        assert_eq!(format_tags(&forward), format_tags(&backward));
        assert_eq!(format_tags(&forward), "Damage 1, Ranged, AOE 1");
    }

    #[test]
    fn repeated_unique_tags_print_once() {
        let tags = [tag(TagType::Ranged), tag(TagType::Ranged)];
        assert_eq!(format_tags(&tags), "Ranged");
    }

    #[test]
    fn formatting_is_idempotent() {
        let tags = [tag(TagType::Immobilize), tag(TagType::CooldownReduction)];
        assert_eq!(format_tags(&tags), format_tags(&tags));
        assert_eq!(format_tags(&tags), "Immobilize, Cooldown Reduction 1");
    }
}
