use std::error::Error;
use std::{fs, path::PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use chess_set_core::Color;

/// A move played by the demo, as written in the config file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScriptedMove {
    pub color: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub white_name: String,
    pub black_name: String,
    pub demo_moves: Vec<ScriptedMove>,
}

impl ScriptedMove {
    fn new(color: &str, from: &str, to: &str) -> Self {
        Self {
            color: color.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn color(&self) -> chess_set_core::error::Result<Color> {
        self.color.parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            white_name: "Player 1".into(),
            black_name: "Player 2".into(),
            demo_moves: vec![
                ScriptedMove::new("white", "e2", "e4"),
                ScriptedMove::new("black", "e7", "e5"),
            ],
        }
    }
}

impl Config {
    /// Loads the config at `path`, or the defaults if there is no path or no file there.
    pub fn load(path: Option<&PathBuf>) -> Result<Self, Box<dyn Error>> {
        let mut cfg = Self::default();
        if let Some(p) = path {
            if p.exists() {
                let content = fs::read_to_string(p)?;
                cfg = Self::from_yaml(&content)?;
                debug!("loaded config from {}", p.display());
            } else {
                warn!("config {} not found, using defaults", p.display());
            }
        }
        Ok(cfg)
    }

    /// Parses a YAML config. Every scripted move must name a valid color.
    pub fn from_yaml(content: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: Self = serde_yaml::from_str(content)?;
        for scripted in &cfg.demo_moves {
            scripted.color()?;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plays_two_pawns() {
        let cfg = Config::default();
        assert_eq!(cfg.white_name, "Player 1");
        assert_eq!(cfg.black_name, "Player 2");
        assert_eq!(cfg.demo_moves.len(), 2);
        assert_eq!(cfg.demo_moves[0].color().unwrap(), Color::White);
        assert_eq!(cfg.demo_moves[1].color().unwrap(), Color::Black);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = Config::from_yaml("white_name: Ada\n").unwrap();
        assert_eq!(cfg.white_name, "Ada");
        assert_eq!(cfg.black_name, "Player 2");
        assert_eq!(cfg.demo_moves, Config::default().demo_moves);
    }

    #[test]
    fn yaml_moves() {
        let yaml = "\
black_name: Grace
demo_moves:
  - { color: w, from: g1, to: f3 }
  - { color: Black, from: b8, to: c6 }
  - { color: white, from: a1, to: a9 }
";
        let cfg = Config::from_yaml(yaml).unwrap();
        assert_eq!(cfg.black_name, "Grace");
        assert_eq!(cfg.demo_moves.len(), 3);
        assert_eq!(cfg.demo_moves[1], ScriptedMove::new("Black", "b8", "c6"));
    }

    #[test]
    fn bad_color_is_rejected() {
        let yaml = "demo_moves:\n  - { color: red, from: e2, to: e4 }\n";
        assert!(Config::from_yaml(yaml).is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = PathBuf::from("this/config/does/not/exist.yaml");
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }
}
