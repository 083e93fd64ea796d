// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Textured point-cloud plane crossfading between two images
    Morph,
    /// Rotating logo model with the procedural crystal and area lights
    Crystal,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "vitrine")]
#[command(about = "Decorative GPU showcase scenes", long_about = None)]
pub struct Cli {
    /// Which scene to run
    #[arg(value_enum, default_value_t = SceneKind::Morph)]
    pub scene: SceneKind,

    /// Tuning overrides (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Rotation speed multiplier for the crystal scene
    /// (shipped presets: 1.0 mobile, 2.0 Safari, 0.5 otherwise)
    #[arg(long)]
    pub speed: Option<f32>,

    /// First texture of the morph pair
    #[arg(long, default_value = "assets/case.png")]
    pub texture_a: PathBuf,

    /// Second texture of the morph pair
    #[arg(long, default_value = "assets/coins.png")]
    pub texture_b: PathBuf,

    /// Logo model for the crystal scene
    #[arg(long, default_value = "assets/logo.glb")]
    pub model: PathBuf,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_morph_scene() {
        let cli = Cli::parse_from(["vitrine"]);
        assert_eq!(cli.scene, SceneKind::Morph);
        assert!(cli.config.is_none());
        assert!(cli.speed.is_none());
    }

    #[test]
    fn parses_scene_and_speed() {
        let cli = Cli::parse_from(["vitrine", "crystal", "--speed", "2.0"]);
        assert_eq!(cli.scene, SceneKind::Crystal);
        assert_eq!(cli.speed, Some(2.0));
    }

    #[test]
    fn asset_paths_are_overridable() {
        let cli = Cli::parse_from(["vitrine", "--texture-a", "x.png", "--model", "m.glb"]);
        assert_eq!(cli.texture_a, PathBuf::from("x.png"));
        assert_eq!(cli.model, PathBuf::from("m.glb"));
    }
}
