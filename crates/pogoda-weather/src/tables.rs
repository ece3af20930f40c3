//! Display lookup tables keyed by condition code.
//!
//! Every lookup is total: codes outside the known set resolve to the
//! `partly-cloudy` icon and gradient and to a generic "no data" tip.

use crate::types::Condition;

/// Background colour used whenever no gradient can be resolved
pub const DEFAULT_BACKGROUND: &str = "#87CEEB";

/// Tip shown for conditions outside the known set
pub const NO_WEATHER_TIP: &str = "Нет данных о погоде";

/// Start and end colours of a background gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: &'static str,
    pub end: &'static str,
}

const FALLBACK_GRADIENT: Gradient = Gradient {
    start: DEFAULT_BACKGROUND,
    end: "#FFFFFF",
};

const FALLBACK_ICON: &str = "⛅";

const MONTH_NAMES: [(&str, &str); 12] = [
    ("01", "января"),
    ("02", "февраля"),
    ("03", "марта"),
    ("04", "апреля"),
    ("05", "мая"),
    ("06", "июня"),
    ("07", "июля"),
    ("08", "августа"),
    ("09", "сентября"),
    ("10", "октября"),
    ("11", "ноября"),
    ("12", "декабря"),
];

impl Condition {
    /// Text glyph for this condition
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::PartlyCloudy => "⛅",
            Self::Cloudy => "☁️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Unknown(_) => FALLBACK_ICON,
        }
    }

    /// Advice sentence shown under the current conditions
    pub fn tip(&self) -> &'static str {
        match self {
            Self::Clear => "Ясная погода Кристина Александровна! Возьмите солнцезащитные очки.",
            Self::PartlyCloudy => {
                "Переменная облачность Кристина Александровна, на всякий случай захватите легкий зонт."
            }
            Self::Cloudy => {
                "Облачная погода Кристина Александровна, наденьте теплую кофту, возможен небольшой ветер."
            }
            Self::Rain => "Дождь Кристина Александровна! Не забудьте зонт и водонепроницаемую обувь.",
            Self::Snow => "Снег Кристина Александровна! Одевайтесь тепло и наденьте нескользящую обувь.",
            Self::Unknown(_) => NO_WEATHER_TIP,
        }
    }

    /// Background gradient. Only `start` is drawn today.
    pub fn gradient(&self) -> Gradient {
        match self {
            Self::Clear => Gradient {
                start: "#FFD700",
                end: "#FFFFFF",
            },
            Self::PartlyCloudy => FALLBACK_GRADIENT,
            Self::Cloudy => Gradient {
                start: "#B0C4DE",
                end: "#D3D3D3",
            },
            Self::Rain => Gradient {
                start: "#4682B4",
                end: "#87CEFA",
            },
            Self::Snow => Gradient {
                start: "#ADD8E6",
                end: "#FFFFFF",
            },
            Self::Unknown(_) => FALLBACK_GRADIENT,
        }
    }
}

/// Genitive month name for a two-digit month code ("04" -> "апреля")
pub fn month_name(code: &str) -> Option<&'static str> {
    MONTH_NAMES
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, name)| *name)
}
