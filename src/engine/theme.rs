use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Neural,
    Cyber,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Neural, Theme::Cyber];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Neural => "neural",
            Theme::Cyber => "cyber",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Neural => "Neural",
            Theme::Cyber => "Cyber",
        }
    }

    /// Page background and accent colour.
    pub fn palette(self) -> (&'static str, &'static str) {
        match self {
            Theme::Neural => ("#050518", "#00f0ff"),
            Theme::Cyber => ("#12001a", "#ff00e6"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neural" => Ok(Theme::Neural),
            "cyber" => Ok(Theme::Cyber),
            other => Err(format!("unknown theme {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_only() {
        assert_eq!("cyber".parse::<Theme>(), Ok(Theme::Cyber));
        assert_eq!("neural".parse::<Theme>(), Ok(Theme::Neural));
        assert!("CYBER".parse::<Theme>().is_err());
    }
}
