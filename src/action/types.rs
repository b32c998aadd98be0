/// Actions that can be performed in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveTop,
    MoveBottom,
    FocusNext,
    Select,
    Back,

    // Color
    ApplyPreset(usize),
    RandomColor,
    Undo,
    Reset,
    CopyColor,
    ToggleFavorite,
    RemoveFavorite,
    ExportFavorites,
    BrightnessUp,
    BrightnessDown,
    ToggleGradient,
    RotateGradientLeft,
    RotateGradientRight,
    CycleSecondary,

    // Prompts
    OpenImage,
    EnterColor,
    Confirm,
    Cancel,

    // Input
    InsertChar(char),
    DeleteChar,
    DeleteWord,

    // Mouse
    Click { column: u16, row: u16 },

    // Other
    ToggleHelp,
    Quit,
    ForceQuit,
}

impl Action {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(n) = s.strip_prefix("ApplyPreset") {
            return n
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=9).contains(n))
                .map(|n| Action::ApplyPreset(n - 1));
        }

        match s {
            "MoveUp" => Some(Action::MoveUp),
            "MoveDown" => Some(Action::MoveDown),
            "MoveTop" => Some(Action::MoveTop),
            "MoveBottom" => Some(Action::MoveBottom),
            "FocusNext" => Some(Action::FocusNext),
            "Select" => Some(Action::Select),
            "Back" => Some(Action::Back),
            "RandomColor" => Some(Action::RandomColor),
            "Undo" => Some(Action::Undo),
            "Reset" => Some(Action::Reset),
            "CopyColor" => Some(Action::CopyColor),
            "ToggleFavorite" => Some(Action::ToggleFavorite),
            "RemoveFavorite" => Some(Action::RemoveFavorite),
            "ExportFavorites" => Some(Action::ExportFavorites),
            "BrightnessUp" => Some(Action::BrightnessUp),
            "BrightnessDown" => Some(Action::BrightnessDown),
            "ToggleGradient" => Some(Action::ToggleGradient),
            "RotateGradientLeft" => Some(Action::RotateGradientLeft),
            "RotateGradientRight" => Some(Action::RotateGradientRight),
            "CycleSecondary" => Some(Action::CycleSecondary),
            "OpenImage" => Some(Action::OpenImage),
            "EnterColor" => Some(Action::EnterColor),
            "Confirm" => Some(Action::Confirm),
            "Cancel" => Some(Action::Cancel),
            "DeleteChar" => Some(Action::DeleteChar),
            "DeleteWord" => Some(Action::DeleteWord),
            "ToggleHelp" => Some(Action::ToggleHelp),
            "Quit" => Some(Action::Quit),
            "ForceQuit" => Some(Action::ForceQuit),
            "None" | "ReceiveChar" => None, // Special actions to disable bindings
            _ => None,
        }
    }
}
