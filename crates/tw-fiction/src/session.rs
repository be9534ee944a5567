//! The session dispatcher: one command in, narration and an outcome out.

use tw_core::{ActionKind, Location, LocationId, World};

use crate::error::{FictionError, FictionResult};
use crate::narrator::{Line, Narrator, Tint};
use crate::parser::{Command, parse};
use crate::player::PlayerState;
use crate::scenario::Scenario;

/// How the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player reached the goal.
    Won,
    /// The player died or was trapped.
    Lost,
}

/// The result of one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game continues; more input is expected.
    Continue,
    /// The game is over; the caller should stop accepting input.
    Ended(Ending),
}

/// Scenario locations resolved against a concrete world.
#[derive(Debug, Clone, Copy)]
struct Plot {
    start: LocationId,
    goal: LocationId,
    bargain_at: LocationId,
    gate_at: LocationId,
    beast_at: LocationId,
}

impl Plot {
    fn resolve(world: &World, scenario: &Scenario) -> FictionResult<Self> {
        let find = |role: &'static str, name: &str| {
            world.find(name).ok_or_else(|| FictionError::UnknownLocation {
                role,
                name: name.to_string(),
            })
        };

        let plot = Self {
            start: find("start", &scenario.start)?,
            goal: find("goal", &scenario.goal)?,
            bargain_at: find("bargain", &scenario.bargain.location)?,
            gate_at: find("crossing", &scenario.crossing.location)?,
            beast_at: find("beast", &scenario.beast.location)?,
        };

        let trigger = |role: &'static str, id: LocationId, trigger: &str| {
            let location = world.get(id);
            if location.exit(trigger).is_none() {
                return Err(FictionError::MissingTrigger {
                    role,
                    location: location.name.clone(),
                    trigger: trigger.to_string(),
                });
            }
            Ok(())
        };
        trigger("bargain", plot.bargain_at, &scenario.bargain.trigger)?;
        trigger("crossing", plot.gate_at, &scenario.crossing.trigger)?;

        Ok(plot)
    }
}

/// One playthrough: owns the world, the scenario, and the player.
///
/// All player-facing failures are narration, never errors; the only
/// `Err` this module produces is a configuration mismatch caught in
/// [`Session::new`]. Turn handling is synchronous and single-threaded:
/// a command is fully resolved, narration included, before the next one
/// is accepted.
pub struct Session {
    world: World,
    scenario: Scenario,
    plot: Plot,
    player: PlayerState,
    ending: Option<Ending>,
}

impl Session {
    /// Wire a scenario to a world, validating every reference.
    pub fn new(world: World, scenario: Scenario) -> FictionResult<Self> {
        let plot = Plot::resolve(&world, &scenario)?;
        let player = PlayerState::new(plot.start);
        Ok(Self {
            world,
            scenario,
            plot,
            player,
            ending: None,
        })
    }

    /// The world being explored.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player's state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Mutable player state, for hosts that stage a scene directly.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// The scenario in play.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// The terminal outcome, once one has been reached.
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Emit the opening narration.
    pub fn start(&mut self, narrator: &mut dyn Narrator) {
        for line in &self.scenario.opening {
            narrator.say(line);
        }
    }

    /// Process one turn of raw player input.
    ///
    /// After a terminal outcome the session is inert: the ending is
    /// returned and nothing is narrated or mutated.
    pub fn handle(&mut self, input: &str, narrator: &mut dyn Narrator) -> Outcome {
        if let Some(ending) = self.ending {
            return Outcome::Ended(ending);
        }

        match parse(input) {
            Command::Empty => {
                narrator.say(&Line::plain("Please enter a command."));
                Outcome::Continue
            }
            Command::Move { direction } => self.travel(&direction, true, narrator),
            Command::Other { verb } => self.travel(&verb, false, narrator),
            Command::Act { verb } => {
                self.perform(&verb, narrator);
                Outcome::Continue
            }
            Command::Take { item } => {
                self.take(item.as_deref(), narrator);
                Outcome::Continue
            }
            Command::Wear { item } => {
                self.wear(item.as_deref(), narrator);
                Outcome::Continue
            }
            Command::Inventory => {
                self.list_inventory(narrator);
                Outcome::Continue
            }
            Command::Lost => {
                // Diagnostic short-circuit: the raw location name, not
                // the describe path.
                narrator.say(&Line::plain(format!(
                    "Current location: {}",
                    self.here().name
                )));
                Outcome::Continue
            }
            Command::Help => {
                self.help(narrator);
                Outcome::Continue
            }
        }
    }

    fn here(&self) -> &Location {
        self.world.get(self.player.location)
    }

    /// Record the terminal outcome. Reached at most once per session:
    /// `handle` is inert after `ending` is set.
    fn finish(&mut self, ending: Ending, narrator: &mut dyn Narrator) -> Outcome {
        narrator.end_game();
        self.ending = Some(ending);
        Outcome::Ended(ending)
    }

    /// Resolve a movement verb against the current location.
    ///
    /// `known_verb` separates the fixed movement vocabulary (which earns
    /// "You can't go that way." when no exit matches) from arbitrary
    /// verbs that are simply not commands here ("Invalid command.").
    fn travel(&mut self, verb: &str, known_verb: bool, narrator: &mut dyn Narrator) -> Outcome {
        let here = self.player.location;
        let Some(destination) = self.world.get(here).exit(verb) else {
            let message = if known_verb {
                "You can't go that way."
            } else {
                "Invalid command."
            };
            narrator.say(&Line::plain(message));
            return Outcome::Continue;
        };

        if here == self.plot.bargain_at && verb.eq_ignore_ascii_case(&self.scenario.bargain.trigger)
        {
            self.seal_bargain(narrator)
        } else if here == self.plot.gate_at
            && verb.eq_ignore_ascii_case(&self.scenario.crossing.trigger)
        {
            self.attempt_crossing(narrator)
        } else if destination == self.plot.beast_at {
            self.face_beast(narrator)
        } else {
            self.arrive(destination, narrator)
        }
    }

    /// Plain movement: step into `destination`, winning if it is the goal.
    fn arrive(&mut self, destination: LocationId, narrator: &mut dyn Narrator) -> Outcome {
        self.player.location = destination;
        if destination == self.plot.goal {
            self.win(narrator)
        } else {
            narrator.say(&Line::plain(self.world.get(destination).description.as_str()));
            Outcome::Continue
        }
    }

    fn win(&mut self, narrator: &mut dyn Narrator) -> Outcome {
        for line in &self.scenario.victory {
            narrator.say(line);
        }
        self.finish(Ending::Won, narrator)
    }

    fn seal_bargain(&mut self, narrator: &mut dyn Narrator) -> Outcome {
        if self.player.has_flag(&self.scenario.ward.flag) {
            for line in &self.scenario.bargain.success {
                narrator.say(line);
            }
            self.player.location = self.plot.goal;
            self.win(narrator)
        } else {
            for line in &self.scenario.bargain.failure {
                narrator.say(line);
            }
            self.finish(Ending::Lost, narrator)
        }
    }

    fn attempt_crossing(&mut self, narrator: &mut dyn Narrator) -> Outcome {
        if self.player.holds(&self.scenario.crossing.token) {
            narrator.say(&self.scenario.crossing.success);
            self.player.location = self.plot.goal;
            self.win(narrator)
        } else {
            narrator.say(&self.scenario.crossing.failure);
            Outcome::Continue
        }
    }

    fn face_beast(&mut self, narrator: &mut dyn Narrator) -> Outcome {
        narrator.say(&self.scenario.beast.ambush);
        if self.player.holds(&self.scenario.beast.weapon) {
            narrator.say(&self.scenario.beast.victory);
            self.player.location = self.plot.beast_at;
            Outcome::Continue
        } else {
            for line in &self.scenario.beast.defeat {
                narrator.say(line);
            }
            self.finish(Ending::Lost, narrator)
        }
    }

    fn perform(&self, verb: &str, narrator: &mut dyn Narrator) {
        let Some(kind) = ActionKind::parse(verb) else {
            narrator.say(&Line::plain("Invalid action."));
            return;
        };
        match self.here().action(kind) {
            Some(action) => narrator.say(&Line::plain(action.message.as_str())),
            None => narrator.say(&Line::plain("Nothing happens.")),
        }
    }

    fn take(&mut self, item: Option<&str>, narrator: &mut dyn Narrator) {
        let Some(name) = item else {
            narrator.say(&Line::plain("Take what?"));
            return;
        };
        match self.world.take_item(self.player.location, name) {
            Some(item) => {
                narrator.say(&Line::plain(format!("You have taken the {}.", item.name)));
                self.player.inventory.push(item);
            }
            None => narrator.say(&Line::plain(format!("There is no {name} here."))),
        }
    }

    fn wear(&mut self, item: Option<&str>, narrator: &mut dyn Narrator) {
        let Some(name) = item else {
            narrator.say(&Line::plain("Wear what?"));
            return;
        };
        let held = match self.player.held(name) {
            Some(item) => item.name.clone(),
            None => {
                narrator.say(&Line::plain(format!("You don't have a {name}.")));
                return;
            }
        };
        if held.eq_ignore_ascii_case(&self.scenario.ward.item) {
            let flag = self.scenario.ward.flag.clone();
            self.player.set_flag(flag, true);
            narrator.say(&self.scenario.ward.donned);
        } else {
            narrator.say(&Line::plain(format!("You can't wear the {held}.")));
        }
    }

    fn list_inventory(&self, narrator: &mut dyn Narrator) {
        if self.player.inventory.is_empty() {
            narrator.say(&Line::plain("Your inventory is empty."));
        } else {
            let names: Vec<&str> = self
                .player
                .inventory
                .iter()
                .map(|item| item.name.as_str())
                .collect();
            narrator.say(&Line::plain(format!("Inventory: {}", names.join(", "))));
        }
    }

    fn help(&self, narrator: &mut dyn Narrator) {
        narrator.say(&Line::tinted("Available Commands:", Tint::Green));
        let here = self.here();
        if !here.exits().is_empty() {
            let exits: Vec<&str> = here.exits().iter().map(|e| e.verb.as_str()).collect();
            narrator.say(&Line::plain(format!("- Exits: {}", exits.join(", "))));
        }
        if !here.actions().is_empty() {
            let actions: Vec<&str> = here.actions().iter().map(|a| a.kind.name()).collect();
            narrator.say(&Line::plain(format!("- Actions: {}", actions.join(", "))));
        }
        narrator.say(&Line::plain(
            "- General Commands: take [item], wear [item], inventory, help",
        ));
    }
}
