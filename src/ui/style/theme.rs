use ratatui::style::{Color, Modifier, Style};

/// Styles for the elements of the search bar and suggestion list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Group header rows ("Object", "Gen Object", ...).
	pub header: Style,
	/// The selected suggestion row.
	pub row_highlight: Style,
	/// Prompt text and the dropdown border.
	pub prompt: Style,
	/// Placeholder, kind tags and empty states.
	pub empty: Style,
	/// The search button.
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}
}

impl Default for Theme {
	fn default() -> Self {
		DEFAULT
	}
}

pub const DEFAULT: Theme = Theme {
	header: Style::new()
		.fg(Color::Gray)
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new().bg(Color::DarkGray),
	prompt: Style::new().fg(Color::Cyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Black)
		.bg(Color::Cyan)
		.add_modifier(Modifier::BOLD),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(122, 122, 122))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new().bg(Color::Rgb(219, 219, 219)),
	prompt: Style::new().fg(Color::Rgb(74, 74, 74)),
	empty: Style::new().fg(Color::Rgb(160, 160, 160)),
	highlight: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(74, 74, 74)),
};

pub const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(7, 54, 66)),
	row_highlight: Style::new()
		.bg(Color::Rgb(0, 43, 54))
		.fg(Color::Rgb(181, 137, 0)),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	highlight: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
};

/// Name of the theme used when none is configured.
pub const DEFAULT_NAME: &str = "default";

const BUILTINS: [(&str, Theme); 3] = [
	(DEFAULT_NAME, DEFAULT),
	("light", LIGHT),
	("solarized", SOLARIZED),
];

/// Names of the bundled themes.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTINS.iter().map(|(name, _)| *name)
}

/// Look up a bundled theme, ignoring case and surrounding whitespace.
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = name.trim().to_ascii_lowercase();
	BUILTINS
		.iter()
		.find(|(candidate, _)| *candidate == normalized)
		.map(|(_, theme)| *theme)
}
