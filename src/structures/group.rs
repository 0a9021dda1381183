use serde::Serialize;

use crate::field::Fields;
use crate::table::Structure;
use crate::units::Handle;

const ITEMS_OFFSET: usize = 0x05;
const ITEM_LEN: usize = 3;

/// Group Associations (type 14).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GroupAssociations {
    pub group_name: String,
    pub items: Vec<GroupItem>,
}

/// A structure which belongs to a group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GroupItem {
    pub item_type: u8,
    pub handle: Handle,
}

impl GroupAssociations {
    pub fn from_structure(s: &Structure) -> Self {
        let f = Fields::new(s);

        // A trailing partial item is ignored.
        let n = f.length().saturating_sub(ITEMS_OFFSET) / ITEM_LEN;
        let items = (0..n)
            .map(|i| {
                let offset = ITEMS_OFFSET + i * ITEM_LEN;
                GroupItem {
                    item_type: f.byte(offset),
                    handle: Handle(f.word(offset + 1)),
                }
            })
            .collect();

        GroupAssociations {
            group_name: f.string(0x04),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_associations_ok() {
        #[rustfmt::skip]
        let s = Structure::new(14, 14, vec![
            0x01,
            0x04, 0x00, 0x04,
            0x04, 0x01, 0x04,
            0x07,
        ], vec!["Cpu Module".to_string()]);

        let want = GroupAssociations {
            group_name: "Cpu Module".to_string(),
            items: vec![
                GroupItem {
                    item_type: 4,
                    handle: Handle(0x0400),
                },
                GroupItem {
                    item_type: 4,
                    handle: Handle(0x0401),
                },
            ],
        };

        assert_eq!(want, GroupAssociations::from_structure(&s));
    }

    #[test]
    fn group_associations_empty() {
        let s = Structure::new(14, 14, vec![], vec![]);

        assert_eq!(GroupAssociations::default(), GroupAssociations::from_structure(&s));
    }
}
