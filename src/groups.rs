// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalogue of the ticket group files a run walks through.
//!
//! Layered wear files are per-sex but share templates; some of their items
//! (the defaults) have no "[Xx]" slot tag, so each layered group names the
//! slot those items belong to.

use crate::types::{CosmeticKind, Family, Slot};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Short group name, e.g. `Basewear_Female` or `Sticker`.
    pub key: String,
    /// File name inside the JSON directory.
    pub file_name: String,
    pub family: Family,
}

impl Group {
    pub fn layered(key: &str, default_slot: Slot) -> Self {
        Self {
            key: key.to_string(),
            file_name: format!("Item_{}.txt", key),
            family: Family::Layered {
                default_slot: Some(default_slot),
            },
        }
    }

    pub fn cosmetic(kind: CosmeticKind) -> Self {
        Self::stack(kind.group_name(), Family::Cosmetic(kind))
    }

    pub fn lobby_actions() -> Self {
        Self::stack("LobbyAction", Family::LobbyAction)
    }

    pub fn voices() -> Self {
        Self::stack("Voice", Family::Voice)
    }

    fn stack(key: &str, family: Family) -> Self {
        Self {
            key: key.to_string(),
            file_name: format!("Item_Stack_{}.txt", key),
            family,
        }
    }
}

/// Every group, in processing order.
pub fn catalogue() -> Vec<Group> {
    let mut groups = vec![
        Group::layered("Basewear_Female", Slot::Basewear),
        Group::layered("Basewear_Male", Slot::Basewear),
        Group::layered("Innerwear_Female", Slot::Innerwear),
        Group::layered("Innerwear_Male", Slot::Innerwear),
        Group::layered("NGS_Outer_Female", Slot::Outerwear),
        Group::layered("NGS_Outer_Male", Slot::Outerwear),
    ];
    groups.extend(CosmeticKind::all().iter().map(|kind| Group::cosmetic(*kind)));
    groups.push(Group::lobby_actions());
    groups.push(Group::voices());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_order_and_file_names() {
        let groups = catalogue();
        assert_eq!(groups.len(), 16);
        assert_eq!(groups[0].file_name, "Item_Basewear_Female.txt");
        assert_eq!(groups[6].file_name, "Item_Stack_Accessory.txt");
        assert_eq!(groups[13].file_name, "Item_Stack_Sticker.txt");
        assert_eq!(groups[14].family, Family::LobbyAction);
        assert_eq!(groups[15].file_name, "Item_Stack_Voice.txt");
    }

    #[test]
    fn outer_groups_default_to_outerwear() {
        let outer = catalogue()
            .into_iter()
            .find(|g| g.key == "NGS_Outer_Male")
            .unwrap();
        assert_eq!(
            outer.family,
            Family::Layered {
                default_slot: Some(Slot::Outerwear)
            }
        );
    }
}
