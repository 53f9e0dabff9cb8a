//! The interactive game loop

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::resolution::resolve_attack;
use crate::core::config::{GameConfig, OPTION_ATTACK, OPTION_CHECK_MISSION, OPTION_EXIT};
use crate::core::error::Result;
use crate::core::types::TerritoryId;
use crate::display;
use crate::map::world_map::WorldMap;
use crate::mission::Mission;

/// Loop state: a session runs until an exit transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Running,
    Exited,
}

/// One game: the map, the secret mission, and the dice
///
/// The session exclusively owns its map; only the attack phase mutates
/// it, through the combat resolver. Reader and writer are injected so a
/// test can script an entire game.
pub struct GameSession {
    config: GameConfig,
    map: WorldMap,
    mission: Mission,
    rng: ChaCha8Rng,
    state: SessionState,
}

impl GameSession {
    pub fn new(config: GameConfig, map: WorldMap) -> Self {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mission = Mission::draw(&mut rng, &config);

        tracing::info!(mission = %mission.description(), "session ready");

        Self {
            config,
            map,
            mission,
            rng,
            state: SessionState::Running,
        }
    }

    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    /// Drive the loop until the player exits, wins, or input ends
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        self.state = SessionState::Running;

        while self.state == SessionState::Running {
            write!(output, "{}", display::map_table(&self.map))?;
            writeln!(output, "{}", display::mission_banner(&self.mission))?;
            write!(output, "{}", display::action_menu())?;
            write!(output, "Choose your action: ")?;
            output.flush()?;

            let line = match read_line(&mut input)? {
                Some(line) => line,
                // end of input counts as leaving the game
                None => break,
            };

            let choice: i32 = match line.trim().parse() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(output, "\nInvalid option. Try again.")?;
                    continue;
                }
            };

            match choice {
                OPTION_ATTACK => self.attack_phase(&mut input, &mut output)?,
                OPTION_CHECK_MISSION => self.check_mission(&mut output)?,
                OPTION_EXIT => {
                    writeln!(output, "\nLeaving the campaign. Until next time!")?;
                    self.state = SessionState::Exited;
                }
                _ => writeln!(output, "\nInvalid option.")?,
            }
        }

        Ok(())
    }

    /// Read both IDs, then hand the order to the combat resolver
    ///
    /// A line that does not parse as an ID aborts the phase on the spot;
    /// a rejected order prints the resolver's reason. Either way the
    /// loop continues.
    fn attack_phase<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        writeln!(output, "\n====== ATTACK PHASE ======")?;

        write!(output, "Attacking territory (ID 1 to {}): ", self.map.len())?;
        output.flush()?;
        let attacker_id = match read_id(input)? {
            Some(id) => id,
            None => {
                writeln!(output, "Invalid attacker ID.")?;
                return Ok(());
            }
        };

        write!(output, "Defending territory (ID 1 to {}): ", self.map.len())?;
        output.flush()?;
        let defender_id = match read_id(input)? {
            Some(id) => id,
            None => {
                writeln!(output, "Invalid defender ID.")?;
                return Ok(());
            }
        };

        match resolve_attack(
            &mut self.map,
            attacker_id,
            defender_id,
            &self.config.player_color,
            &mut self.rng,
        ) {
            Ok(report) => write!(output, "{}", display::battle_narration(&report))?,
            Err(rejection) => writeln!(output, "{}", rejection)?,
        }

        Ok(())
    }

    fn check_mission<W: Write>(&mut self, output: &mut W) -> Result<()> {
        if self.mission.is_complete(&self.map, &self.config.player_color) {
            write!(output, "{}", display::victory_banner())?;
            tracing::info!("mission complete");
            self.state = SessionState::Exited;
        } else {
            write!(output, "{}", display::mission_incomplete())?;
        }
        Ok(())
    }
}

/// One line of input, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// One line parsed as a territory ID; `None` for EOF or a malformed line
fn read_id<R: BufRead>(input: &mut R) -> std::io::Result<Option<TerritoryId>> {
    let line = match read_line(input)? {
        Some(line) => line,
        None => return Ok(None),
    };
    Ok(line.trim().parse::<usize>().ok().map(TerritoryId))
}
