//! Keybinding definitions
//!
//! Defines the keyboard shortcuts shown in the help overlay. The handler
//! matches keys directly; every key it accepts has a row here.

use crate::wizard::Step;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Display form of the key
    pub label: &'static str,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active on free-text steps
    TextStep,
    /// Active on the intensity slider step
    SliderStep,
}

impl KeyContext {
    /// Context for a wizard step
    pub fn for_step(step: Step) -> Self {
        if step.field().is_text() {
            KeyContext::TextStep
        } else {
            KeyContext::SliderStep
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            KeyContext::Global => "Global Keys",
            KeyContext::TextStep => "Writing",
            KeyContext::SliderStep => "Intensity Slider",
        }
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        label: "Enter",
        description: "Next step / Complete",
        context: KeyContext::Global,
    },
    Keybinding {
        label: "F1",
        description: "Show/hide help",
        context: KeyContext::Global,
    },
    Keybinding {
        label: "Esc",
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        label: "Ctrl+c",
        description: "Quit",
        context: KeyContext::Global,
    },
    // Text steps
    Keybinding {
        label: "Backspace",
        description: "Delete before cursor",
        context: KeyContext::TextStep,
    },
    Keybinding {
        label: "Delete",
        description: "Delete at cursor",
        context: KeyContext::TextStep,
    },
    Keybinding {
        label: "Left/Right",
        description: "Move cursor",
        context: KeyContext::TextStep,
    },
    Keybinding {
        label: "Home/End",
        description: "Jump to start/end",
        context: KeyContext::TextStep,
    },
    // Slider step
    Keybinding {
        label: "Left/Right",
        description: "Lower/raise intensity",
        context: KeyContext::SliderStep,
    },
    Keybinding {
        label: "Down/Up",
        description: "Lower/raise intensity",
        context: KeyContext::SliderStep,
    },
    Keybinding {
        label: "h/l",
        description: "Lower/raise intensity",
        context: KeyContext::SliderStep,
    },
    Keybinding {
        label: "-/+ or =",
        description: "Lower/raise intensity",
        context: KeyContext::SliderStep,
    },
    Keybinding {
        label: "1-9, 0",
        description: "Set intensity (0 = 10)",
        context: KeyContext::SliderStep,
    },
    Keybinding {
        label: "Home/End",
        description: "Set intensity to 1/10",
        context: KeyContext::SliderStep,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings_for_context(context: KeyContext) -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(move |kb| kb.context == context)
}
