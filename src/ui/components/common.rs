use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

/// Rounded block titled in `color`, used for screens and modals alike.
pub fn create_dialog_block(title: &str, color: Color) -> Block<'_> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(color))
        .title(title)
        .title_style(Style::new().fg(color).add_modifier(Modifier::BOLD))
}

/// Creates an input field block. The focused field shows a cursor and a
/// highlighted border; masked fields render one `•` per character.
pub fn create_input_paragraph<'a>(value: &str, field_title: &str, focused: bool, masked: bool) -> Paragraph<'a> {
    let shown = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let input_display = if focused { format!("{}█", shown) } else { shown };

    let border = if focused { Color::Cyan } else { Color::Gray };
    Paragraph::new(input_display).fg(Color::White).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(border))
            .title(format!(" {} ", field_title)),
    )
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// One centered line of `key description` pairs, keys bold in their color.
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let spans: Vec<Span<'a>> = instructions
        .iter()
        .flat_map(|&(key, color, desc)| [key.fg(color).bold(), desc.fg(Color::Gray)])
        .collect();
    Paragraph::new(Line::from(spans)).centered()
}

/// Creates a one-line error paragraph, empty when there is no error
pub fn create_error_paragraph<'a>(error: Option<&str>) -> Paragraph<'a> {
    Paragraph::new(error.unwrap_or_default().to_string()).fg(Color::Red).centered()
}

/// Common instruction shortcuts used across screens
pub mod shortcuts {
    use super::{Color, InstructionShortcut};

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Submit");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_BACK: InstructionShortcut = ("Esc", Color::Red, " Back");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
}
