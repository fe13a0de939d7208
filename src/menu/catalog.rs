//! Static menu catalog.
//!
//! Every menu level is a fixed slice of [`MenuEntry`]. Each entry is
//! tagged at construction time with what selecting it does, so the
//! navigator never compares label text to find the BACK item or the
//! transmission submenu.

/// Number of top-level categories.
pub const MAIN_MENU_COUNT: usize = 6;

/// Number of entries in every category submenu (including BACK).
pub const SUB_MENU_COUNT: usize = 5;

/// Number of entries in the transmission submenu (including BACK).
pub const TRANSMISSION_MENU_COUNT: usize = 5;

/// Top-level menu categories, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    Wifi,
    Ble,
    Infrared,
    Neokin,
    Gpio,
    Settings,
}

impl Category {
    pub const ALL: [Category; MAIN_MENU_COUNT] = [
        Category::Wifi,
        Category::Ble,
        Category::Infrared,
        Category::Neokin,
        Category::Gpio,
        Category::Settings,
    ];

    /// Category at `index` in the main menu.
    ///
    /// Panics if `index >= MAIN_MENU_COUNT`; the navigator keeps its
    /// indices in range, so this only fires on a logic error.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Main menu label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Wifi => "WIFI",
            Category::Ble => "BLE",
            Category::Infrared => "INFRARED",
            Category::Neokin => "NEOKIN",
            Category::Gpio => "GPIO",
            Category::Settings => "SETTINGS",
        }
    }

    /// ASCII glyph drawn above the label on the main menu and as the
    /// context marker on the function screen.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Wifi => "-}",
            Category::Ble => "{}",
            Category::Infrared => "} ~",
            Category::Neokin => "^.^",
            Category::Gpio => "<>",
            Category::Settings => "#",
        }
    }

    /// Submenu entries for this category.
    pub fn items(self) -> &'static [MenuEntry; SUB_MENU_COUNT] {
        match self {
            Category::Wifi => &WIFI_ITEMS,
            Category::Ble => &BLE_ITEMS,
            Category::Infrared => &INFRARED_ITEMS,
            Category::Neokin => &NEOKIN_ITEMS,
            Category::Gpio => &GPIO_ITEMS,
            Category::Settings => &SETTINGS_ITEMS,
        }
    }
}

/// Named slot for every leaf item. The application binds behaviour to
/// these through an [`ActionDispatch`](crate::actions::ActionDispatch).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    WifiAttacks,
    WifiScan,
    WifiSelect,
    WifiStatus,
    BleAttacks,
    BleScan,
    BleStatus,
    BleConfig,
    InfraredReceive,
    InfraredLibrary,
    InfraredBombardment,
    NeokinStatus,
    NeokinVitals,
    NeokinLevel,
    NeokinPlay,
    GpioRead,
    GpioWrite,
    GpioToggle,
    GpioMonitor,
    SettingsGeneral,
    SettingsAppearance,
    SettingsDisplay,
    SettingsOther,
    DirectSend,
    RepeatSend,
    BurstSend,
    AdaptiveSend,
}

impl Action {
    pub const COUNT: usize = 27;

    /// Dense index, usable as a table slot.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Send-mode actions live under the transmission submenu and return
    /// there when they finish.
    pub fn is_send_mode(self) -> bool {
        matches!(
            self,
            Action::DirectSend | Action::RepeatSend | Action::BurstSend | Action::AdaptiveSend
        )
    }
}

/// What selecting an entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EntryKind {
    /// Leaf item bound to an action slot.
    Leaf(Action),
    /// Opens the infrared transmission submenu.
    Transmission,
    /// Returns one level up.
    Back,
}

/// One row of a menu level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub kind: EntryKind,
}

impl MenuEntry {
    const fn leaf(label: &'static str, action: Action) -> Self {
        Self {
            label,
            kind: EntryKind::Leaf(action),
        }
    }

    pub fn is_back(&self) -> bool {
        self.kind == EntryKind::Back
    }

    /// The bound action, if this is a leaf.
    pub fn action(&self) -> Option<Action> {
        match self.kind {
            EntryKind::Leaf(action) => Some(action),
            _ => None,
        }
    }
}

const BACK: MenuEntry = MenuEntry {
    label: "BACK",
    kind: EntryKind::Back,
};

static WIFI_ITEMS: [MenuEntry; SUB_MENU_COUNT] = [
    MenuEntry::leaf("ATTACKS", Action::WifiAttacks),
    MenuEntry::leaf("SCAN", Action::WifiScan),
    MenuEntry::leaf("SELECT", Action::WifiSelect),
    MenuEntry::leaf("STATUS", Action::WifiStatus),
    BACK,
];

static BLE_ITEMS: [MenuEntry; SUB_MENU_COUNT] = [
    MenuEntry::leaf("ATTACKS", Action::BleAttacks),
    MenuEntry::leaf("SCAN", Action::BleScan),
    MenuEntry::leaf("STATUS", Action::BleStatus),
    MenuEntry::leaf("CONFIG", Action::BleConfig),
    BACK,
];

static INFRARED_ITEMS: [MenuEntry; SUB_MENU_COUNT] = [
    MenuEntry {
        label: "TRANSMISSION",
        kind: EntryKind::Transmission,
    },
    MenuEntry::leaf("RECIEVE", Action::InfraredReceive),
    MenuEntry::leaf("LIBRARY", Action::InfraredLibrary),
    MenuEntry::leaf("BOMBARDMENT", Action::InfraredBombardment),
    BACK,
];

static NEOKIN_ITEMS: [MenuEntry; SUB_MENU_COUNT] = [
    MenuEntry::leaf("STATUS", Action::NeokinStatus),
    MenuEntry::leaf("VITALS", Action::NeokinVitals),
    MenuEntry::leaf("LEVEL", Action::NeokinLevel),
    MenuEntry::leaf("PLAY", Action::NeokinPlay),
    BACK,
];

static GPIO_ITEMS: [MenuEntry; SUB_MENU_COUNT] = [
    MenuEntry::leaf("READ", Action::GpioRead),
    MenuEntry::leaf("WRITE", Action::GpioWrite),
    MenuEntry::leaf("TOGGLE", Action::GpioToggle),
    MenuEntry::leaf("MONITOR", Action::GpioMonitor),
    BACK,
];

static SETTINGS_ITEMS: [MenuEntry; SUB_MENU_COUNT] = [
    MenuEntry::leaf("GENERAL", Action::SettingsGeneral),
    MenuEntry::leaf("APPEARANCE", Action::SettingsAppearance),
    MenuEntry::leaf("DISPLAY", Action::SettingsDisplay),
    MenuEntry::leaf("OTHER", Action::SettingsOther),
    BACK,
];

static TRANSMISSION_ITEMS: [MenuEntry; TRANSMISSION_MENU_COUNT] = [
    MenuEntry::leaf("DIRECT SEND", Action::DirectSend),
    MenuEntry::leaf("REPEAT SEND", Action::RepeatSend),
    MenuEntry::leaf("BURST SEND", Action::BurstSend),
    MenuEntry::leaf("ADAPTIVE SEND", Action::AdaptiveSend),
    BACK,
];

/// Submenu entries for the category at `category` (main menu index).
pub fn items_for(category: usize) -> &'static [MenuEntry] {
    Category::from_index(category).items()
}

/// Label of submenu entry `index` under category `category`.
pub fn label_at(category: usize, index: usize) -> &'static str {
    items_for(category)[index].label
}

/// Main-menu label of category `category`.
pub fn main_label(category: usize) -> &'static str {
    Category::from_index(category).label()
}

/// Carousel glyph of category `category`.
pub fn icon(category: usize) -> &'static str {
    Category::from_index(category).icon()
}

/// Entries of the infrared transmission submenu.
pub fn transmission_items() -> &'static [MenuEntry] {
    &TRANSMISSION_ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_single_trailing_back(items: &[MenuEntry]) {
        assert!(!items.is_empty());
        assert!(items.last().unwrap().is_back());
        assert_eq!(items.iter().filter(|e| e.is_back()).count(), 1);
    }

    #[test]
    fn every_level_ends_with_exactly_one_back() {
        for category in Category::ALL {
            assert_single_trailing_back(category.items());
        }
        assert_single_trailing_back(transmission_items());
    }

    #[test]
    fn level_sizes_are_fixed() {
        assert_eq!(Category::ALL.len(), 6);
        for category in 0..MAIN_MENU_COUNT {
            assert_eq!(items_for(category).len(), SUB_MENU_COUNT);
        }
        assert_eq!(transmission_items().len(), TRANSMISSION_MENU_COUNT);
    }

    #[test]
    fn category_index_roundtrip() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(Category::from_index(i), *category);
        }
    }

    #[test]
    fn infrared_items_match_device_labels() {
        let labels: heapless::Vec<&str, 5> = items_for(Category::Infrared.index())
            .iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(
            labels.as_slice(),
            ["TRANSMISSION", "RECIEVE", "LIBRARY", "BOMBARDMENT", "BACK"]
        );
    }

    #[test]
    fn only_infrared_has_a_transmission_entry() {
        for category in Category::ALL {
            let has = category
                .items()
                .iter()
                .any(|e| e.kind == EntryKind::Transmission);
            assert_eq!(has, category == Category::Infrared);
        }
    }

    #[test]
    fn label_at_reads_submenu_rows() {
        assert_eq!(label_at(0, 1), "SCAN");
        assert_eq!(label_at(4, 3), "MONITOR");
        assert_eq!(label_at(5, 4), "BACK");
        assert_eq!(main_label(3), "NEOKIN");
        assert_eq!(icon(2), "} ~");
    }

    #[test]
    fn action_slots_are_dense_and_unique() {
        let mut seen = [false; Action::COUNT];
        let leaves = Category::ALL
            .iter()
            .flat_map(|c| c.items().iter())
            .chain(transmission_items().iter())
            .filter_map(MenuEntry::action);
        for action in leaves {
            assert!(!seen[action.index()], "{:?} bound twice", action);
            seen[action.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn send_modes_are_exactly_the_transmission_leaves() {
        for entry in transmission_items() {
            if let Some(action) = entry.action() {
                assert!(action.is_send_mode());
            }
        }
        assert!(!Action::GpioRead.is_send_mode());
        assert!(!Action::InfraredReceive.is_send_mode());
    }

    #[test]
    #[should_panic]
    fn out_of_range_category_is_a_contract_violation() {
        let _ = items_for(MAIN_MENU_COUNT);
    }
}
