
/// The log categories understood by [DevConsole](crate::logger::DevConsole)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum LogLevel {
    Message,
    Success,
    Warn,
    Error,
    #[default]
    Default,
}

impl LogLevel {
    pub const VALUES: [Self; 5] = [
        Self::Message,
        Self::Success,
        Self::Warn,
        Self::Error,
        Self::Default,
    ];

    /// Returns the level for `name`
    ///
    /// Unknown names resolve to [LogLevel::Default] instead of failing.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "message" | "log" => Self::Message,
            "success" => Self::Success,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Default,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Message => "message",
            LogLevel::Success => "success",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Default => "default",
        }
    }

    /// Returns the color of the left border used to tell levels apart
    pub fn accent_color(&self) -> &'static str {
        match self {
            LogLevel::Message => "#0000ff",
            LogLevel::Success => "#00ff00",
            LogLevel::Warn => "#ff00ff",
            LogLevel::Error => "#ff0000",
            LogLevel::Default => "#292bd5",
        }
    }
}

impl From<&str> for LogLevel {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

/// Label, style and icon which are shown in the group header of a log call
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LevelDescriptor {
    pub label: &'static str,
    pub style: String,
    pub icon: &'static str,
}

/// Returns the descriptor of `level` with a style which uses `border_color` for the left border
pub fn describe(level: LogLevel, border_color: &str) -> LevelDescriptor {
    let (label, icon) = match level {
        LogLevel::Message => ("LOG", "📝"),
        LogLevel::Success => ("SUCCESS", "✅"),
        LogLevel::Warn => ("WARN", "⚠"),
        LogLevel::Error => ("ERROR", "🚨"),
        LogLevel::Default => ("DEFAULT", "🚨"),
    };

    LevelDescriptor {
        label,
        style: header_style(border_color),
        icon,
    }
}

fn header_style(border_color: &str) -> String {
    let border_left = format!("5px solid {border_color}");

    let properties = [
        ("color", "#1a1a1a"),
        ("background-color", "#eeeeee"),
        ("border-left", border_left.as_str()),
        ("padding", "6px 8px"),
        ("border-radius", "5px"),
    ];

    properties.iter().
            map(|(key, value)| format!("{key}: {value}")).
            collect::<Vec<_>>().
            join("; ")
}
