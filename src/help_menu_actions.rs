use crate::HelpSource;

// Built-in system commands start at SC_SIZE (0xF000).
pub const HELP_MENU_USE_ONLINE: u32 = 1000;
pub const HELP_MENU_USE_OFFLINE: u32 = 1001;

pub const HELP_MENU_USE_ONLINE_LABEL: &str = "Use Online Help";
pub const HELP_MENU_USE_OFFLINE_LABEL: &str = "Use Offline Help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpMenuAction {
    UseOnline,
    UseOffline,
}

impl HelpMenuAction {
    pub const ALL: [HelpMenuAction; 2] = [HelpMenuAction::UseOnline, HelpMenuAction::UseOffline];

    pub fn command_id(self) -> u32 {
        match self {
            HelpMenuAction::UseOnline => HELP_MENU_USE_ONLINE,
            HelpMenuAction::UseOffline => HELP_MENU_USE_OFFLINE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HelpMenuAction::UseOnline => HELP_MENU_USE_ONLINE_LABEL,
            HelpMenuAction::UseOffline => HELP_MENU_USE_OFFLINE_LABEL,
        }
    }

    pub fn target(self) -> HelpSource {
        match self {
            HelpMenuAction::UseOnline => HelpSource::Online,
            HelpMenuAction::UseOffline => HelpSource::Offline,
        }
    }

    /// Menu id used where the platform menu keys items by string.
    pub fn menu_id(self) -> String {
        self.command_id().to_string()
    }
}

pub fn action_from_system_command(command_id: u32) -> Option<HelpMenuAction> {
    match command_id {
        HELP_MENU_USE_ONLINE => Some(HelpMenuAction::UseOnline),
        HELP_MENU_USE_OFFLINE => Some(HelpMenuAction::UseOffline),
        _ => None,
    }
}

pub fn action_from_menu_id(menu_id: &str) -> Option<HelpMenuAction> {
    menu_id
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(action_from_system_command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SC_MOVE: u32 = 0xF010;
    const SC_CLOSE: u32 = 0xF060;
    const SC_MINIMIZE: u32 = 0xF020;

    #[test]
    fn action_from_system_command_maps_reserved_ids() {
        assert_eq!(
            action_from_system_command(HELP_MENU_USE_ONLINE),
            Some(HelpMenuAction::UseOnline)
        );
        assert_eq!(
            action_from_system_command(HELP_MENU_USE_OFFLINE),
            Some(HelpMenuAction::UseOffline)
        );
    }

    #[test]
    fn action_from_system_command_ignores_builtin_commands() {
        for command in [SC_MOVE, SC_CLOSE, SC_MINIMIZE, 0, 999, 1002] {
            assert_eq!(action_from_system_command(command), None);
        }
    }

    #[test]
    fn action_from_menu_id_round_trips_through_menu_id() {
        for action in HelpMenuAction::ALL {
            assert_eq!(action_from_menu_id(&action.menu_id()), Some(action));
        }
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
        assert_eq!(action_from_menu_id("61536"), None);
    }

    #[test]
    fn labels_match_menu_copy() {
        assert_eq!(HelpMenuAction::UseOnline.label(), "Use Online Help");
        assert_eq!(HelpMenuAction::UseOffline.label(), "Use Offline Help");
    }
}
