//! Text output for a terminal: banner, statistics tables, score changes and
//! the game-over overlay.

use game_core::{Config, DrawCommand, Players, Renderer};

const RULE: &str = "==================================================";

/// Prints the scoreboard whenever it changes
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    last_score: Option<(u32, u32)>,
    overlay_shown: bool,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines to print for `frame`: one when the score changed, plus the
    /// game-over overlay the first time it appears.
    fn frame_lines(&mut self, frame: &[DrawCommand]) -> Vec<String> {
        let mut names = None;
        for cmd in frame {
            if let DrawCommand::Names { left, right, .. } = cmd {
                names = Some((left.as_str(), right.as_str()));
            }
        }
        let (left_name, right_name) = names.unwrap_or(("Left", "Right"));

        let mut lines = Vec::new();
        for cmd in frame {
            match cmd {
                DrawCommand::Score { left, right } => {
                    let score = (*left, *right);
                    if self.last_score != Some(score) {
                        lines.push(format!("  {left_name} {left}  |  {right} {right_name}"));
                        self.last_score = Some(score);
                    }
                }
                DrawCommand::GameOver {
                    headline,
                    final_score,
                    recent,
                    ..
                } if !self.overlay_shown => {
                    lines.push(format!("\n {headline} "));
                    lines.push(final_score.clone());
                    lines.push(recent.clone());
                    self.overlay_shown = true;
                }
                _ => {}
            }
        }
        lines
    }
}

impl Renderer for ConsoleRenderer {
    fn present(&mut self, frame: &[DrawCommand]) {
        for line in self.frame_lines(frame) {
            println!("{line}");
        }
    }
}

pub fn print_banner(config: &Config, players: &Players) {
    println!("\n{RULE}");
    println!(" WELCOME TO PONG ");
    println!("{RULE}");
    println!("\nFirst to {} points wins!", config.winning_score);
    println!("\nControls:");
    for (_side, profile) in players.iter() {
        println!(
            "  {}: {} (up) / {} (down)",
            profile.name, profile.controls.up, profile.controls.down
        );
    }
    println!("\n{RULE}\n");
}

pub fn print_stats(players: &Players) {
    println!("\n{RULE}");
    println!(" PLAYER STATISTICS");
    println!("{RULE}");
    for (_side, profile) in players.iter() {
        println!("{}:", profile.name);
        println!("  Total Games: {}", profile.total_games);
        println!("  Total Wins: {}", profile.total_wins);
        println!("  Win Rate: {:.1}%", profile.win_rate());
    }
    println!("{RULE}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{NullRecorder, Side, Simulation};

    fn score_frame(left: u32, right: u32) -> Vec<DrawCommand> {
        vec![
            DrawCommand::Score { left, right },
            DrawCommand::Names {
                left: "Player 1".to_string(),
                right: "Player 2".to_string(),
                left_color: "cyan".to_string(),
                right_color: "magenta".to_string(),
            },
        ]
    }

    #[test]
    fn test_repeated_score_prints_nothing() {
        let mut console = ConsoleRenderer::new();
        assert_eq!(console.frame_lines(&score_frame(0, 0)).len(), 1);
        assert!(console.frame_lines(&score_frame(0, 0)).is_empty());
        assert!(console.frame_lines(&score_frame(0, 0)).is_empty());
    }

    #[test]
    fn test_score_change_prints_one_line() {
        let mut console = ConsoleRenderer::new();
        console.frame_lines(&score_frame(0, 0));

        let lines = console.frame_lines(&score_frame(1, 0));

        assert_eq!(lines, vec!["  Player 1 1  |  0 Player 2".to_string()]);
    }

    #[test]
    fn test_unnamed_frame_falls_back_to_sides() {
        let mut console = ConsoleRenderer::new();
        let lines = console.frame_lines(&[DrawCommand::Score { left: 2, right: 3 }]);
        assert_eq!(lines, vec!["  Left 2  |  3 Right".to_string()]);
    }

    #[test]
    fn test_game_over_overlay_prints_once() {
        let config = Config {
            winning_score: 1,
            ..Config::default()
        };
        let mut sim = Simulation::new(config, Players::new());
        sim.match_state
            .add_point(Side::Left, &mut sim.players, &sim.config, &mut NullRecorder);
        assert!(sim.is_over());
        let frame = sim.frame();

        let mut console = ConsoleRenderer::new();
        let first = console.frame_lines(&frame);

        assert_eq!(
            first,
            vec![
                "  Player 1 1  |  0 Player 2".to_string(),
                "\n Player 1 WINS! ".to_string(),
                "Final Score: 1 - 0".to_string(),
                "Recent Scores: [('Player 1', 1)]".to_string(),
            ]
        );
        assert!(console.frame_lines(&frame).is_empty(), "Overlay is shown once");
        assert!(console.frame_lines(&frame).is_empty());
    }
}
