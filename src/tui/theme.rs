use ratatui::style::Color;

// Picker colors
pub const ACCENT_MAGENTA: Color = Color::Rgb(255, 0, 255);    // #FF00FF ticks + indicator
pub const LABEL_WHITE: Color = Color::Rgb(255, 255, 255);     // #FFFFFF

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
pub const SELECTION_GOLD: Color = Color::Rgb(219, 171, 121);  // #DBAB79
