//! The bundled adventure: "A Court of Thorns and Roses".
//!
//! Pure data. The player starts in the shadow of the Wall and must reach
//! the Spring Court on the far side — by squeezing through the gap in
//! the East Wall with the faerie token, or by striking a bargain with
//! the Wall faerie while warded by the magic amulet. The Dark Forest is
//! guarded by a beast only the iron dagger can kill.

use tw_core::{ActionKind, LocationDraft, World, WorldResult};

use crate::error::FictionResult;
use crate::narrator::{Line, Tint};
use crate::scenario::{BargainRule, BeastRule, CrossingRule, Scenario, WardRule};
use crate::session::Session;

const WALL_LISTEN: &str = "You close your eyes and focus on the faint sounds beyond the Wall. The soft hum of magic fills the air, broken only by distant rustling from the other side, as if something is waiting.";
const WALL_LOOK: &str = "Your eyes trace the weathered surface of the Wall, its cracked stone worn by time. Vines snake up the sides, their twisting forms hinting at the magic pulsing just beneath the surface.";
const WALL_INVESTIGATE: &str = "As you inspect the Wall closely, your fingers brush over the cracks, feeling the magic thrumming beneath the stone. In one spot, the mortar seems weaker, almost as if the Wall is hiding something.";
const WALL_FEEL: &str = "You press your hand against the cold stone, and the Wall seems to pulse faintly in response. The magic hums under your skin, alive and ancient, as if it's aware of your presence.";

const FAERIE_LISTEN: &str = "The faerie’s voice is soft, barely above a whisper, but you hear the amusement in their tone. A low hum of magic fills the space between you, as if the very air is holding its breath.";
const FAERIE_LOOK: &str = "The faerie’s glowing eyes watch you intently, their smile sharp and knowing. Every movement they make seems deliberate, as if they’re sizing you up for the bargain yet to come.";
const FAERIE_INVESTIGATE: &str = "You take in every detail—the shimmer of the faerie’s skin, the slight glow of magic surrounding them. Their presence radiates both danger and allure, tempting you to move closer despite the risks.";
const FAERIE_FEEL: &str = "As you stand near the faerie, a strange warmth fills the air, wrapping around you like an invisible force. It feels heavy, almost tangible, as if the magic itself is waiting for your decision.";

const FOREST_LISTEN: &str = "The forest is eerily quiet, save for the occasional rustle of leaves above. Faint whispers seem to drift through the trees, carried by a breeze that feels more magical than natural.";
const FOREST_LOOK: &str = "The trees loom tall and twisted, their branches forming a dense canopy that blocks out the light. Shadows flicker across the ground, and between them, you notice subtle movements—perhaps something is watching you.";
const FOREST_INVESTIGATE: &str = "You crouch down, running your fingers over the forest floor. Hidden beneath the leaves, you notice faint tracks, too delicate to be human, leading deeper into the darkness.";
const FOREST_FEEL: &str = "The air in the forest is thick with a magical charge, making your skin tingle. As you brush past the trees, their bark feels rough and alive, as if the forest itself is aware of your presence.";

/// Shared by the Dark Forest description and the beast ambush line.
const DARK_FOREST: &str = "The forest around you grows darker, the trees closing in like a cage. Suddenly, a low growl rumbles from the shadows. A massive beast, its eyes glowing with feral hunger, emerges from the underbrush. Its fur bristles as it bares its teeth, ready to strike. You know instinctively that magic alone won’t save you here.";

fn wall_actions(draft: LocationDraft) -> LocationDraft {
    draft
        .action(ActionKind::Listen, WALL_LISTEN)
        .action(ActionKind::Look, WALL_LOOK)
        .action(ActionKind::Investigate, WALL_INVESTIGATE)
        .action(ActionKind::Feel, WALL_FEEL)
}

fn faerie_actions(draft: LocationDraft) -> LocationDraft {
    draft
        .action(ActionKind::Listen, FAERIE_LISTEN)
        .action(ActionKind::Look, FAERIE_LOOK)
        .action(ActionKind::Investigate, FAERIE_INVESTIGATE)
        .action(ActionKind::Feel, FAERIE_FEEL)
}

fn forest_actions(draft: LocationDraft) -> LocationDraft {
    draft
        .action(ActionKind::Listen, FOREST_LISTEN)
        .action(ActionKind::Look, FOREST_LOOK)
        .action(ActionKind::Investigate, FOREST_INVESTIGATE)
        .action(ActionKind::Feel, FOREST_FEEL)
}

/// Build the story's world graph.
pub fn world() -> WorldResult<World> {
    World::builder()
        .location(wall_actions(
            LocationDraft::new("The Wall", "You find yourself once again before the towering barrier of weathered stone, its surface cracked and pulsing with that familiar, faint magical hum. Vines continue to twist along its edges, and the air feels just as charged as before, thick with the knowledge that this Wall separates two very different worlds. The sense of foreboding that clings to it hasn't faded—it lingers, waiting.")
                .exit("east", "East Wall")
                .exit("west", "West Wall")
                .exit("south", "Forest Bordering The Wall"),
        ))
        .location(wall_actions(
            LocationDraft::new("East Wall", "You move east, tracing the length of the Wall as it rises imposingly above you. The air grows heavier with the scent of damp earth and old magic. As your fingers brush against the cold stone, you notice a small gap, just large enough to slip through. The stones here are worn and cracked, the magic weaker. It would be risky, but you could try to squeeze through.")
                .exit("cross", "Spring Court")
                .exit("west", "The Wall"),
        ))
        .location(wall_actions(
            LocationDraft::new("West Wall", "As you walk west along The Wall, the dark shadows of the forest grow denser. The trees close in around you, their branches reaching like skeletal fingers. Deeper into the woods, the faint glow of a faerie catches your eye. The faerie watches you from a distance, their glowing eyes betraying no emotion. There’s something both inviting and dangerous about their presence, inexplicably tempting you to approach.")
                .exit("approach", "Approach the Wall Faerie")
                .exit("east", "The Wall"),
        ))
        .location(faerie_actions(
            LocationDraft::new("Approach the Wall Faerie", "You cautiously move toward the faerie, their glowing eyes flickering with amusement. A sly smile curls at their lips as you draw nearer. 'Ah,' they murmur, 'another mortal bold enough to seek passage. But nothing in this world comes without a price.' Their words hang in the air, the weight of a bargain not yet spoken.")
                .exit("bargain", "Bargaining with the Wall Faerie")
                .exit("retreat", "West Wall"),
        ))
        .location(
            LocationDraft::new("Bargaining with the Wall Faerie", "The faerie’s smile sharpens as they step closer. 'I will guide you through the Wall unharmed,' they purr, 'but in return, you will owe me a favor. Not today, but when I come to collect, you must fulfill it, no matter the cost. Do you dare strike such a deal?'")
                .exit("accept", "Spring Court")
                .exit("reject", "West Wall"),
        )
        .location(forest_actions(
            LocationDraft::new("Forest Bordering The Wall", "You retreat from the Wall and into the dark forest. The trees close in around you, casting long shadows that make it difficult to see the path ahead, but impossible to stray off of it. The magic of the Wall still lingers, making the air feel heavy. There’s something watching you, but it’s unclear if it’s human or fae.")
                .exit("north", "The Wall")
                .exit("south", "Forest Clearing")
                .exit("east", "Edge of Forest"),
        ))
        .location(forest_actions(
            LocationDraft::new("Forest Clearing", "As you continue exploring, you come upon a clearing in the forest, where something catches your eye. Hidden beneath a thick layer of leaves, you spot the glint of metal. You kneel down and uncover a worn, iron dagger, its blade rough but sturdy. Iron—the one thing that can cut through faerie magic. You sense that this weapon may be the key to surviving whatever dangers lie ahead.")
                .exit("north", "Forest Bordering The Wall")
                .exit("south", "Forest")
                .exit("east", "Dark Forest")
                .item("iron dagger"),
        ))
        .location(
            LocationDraft::new("Dark Forest", DARK_FOREST)
                .exit("north", "Edge of Forest")
                .exit("west", "Forest Clearing"),
        )
        .location(forest_actions(
            LocationDraft::new("Edge of Forest", "You break through the dense undergrowth, the darkness of the forest thinning as you move north. The towering Wall looms ahead, visible through gaps in the trees, its surface faintly glowing with magic. The forest is still thick around you, but the air feels different—lighter, as if you're nearing the forest’s edge. Vines and roots tangle at your feet, but beyond the trees, the open space near the Wall beckons.")
                .exit("north", "East Wall")
                .exit("west", "Forest Bordering The Wall"),
        ))
        .location(forest_actions(
            LocationDraft::new("Forest", "As you venture deeper into the forest, the shadows grow thicker, and the air feels charged with an eerie stillness. Suddenly, a glint of light catches your eye—a delicate amulet hangs from the branch of an old, twisted tree. Its surface shimmers with a faint, ethereal glow, pulsing in time with the slow rustling of the leaves. The magic radiating from it feels both inviting and unsettling. You pause, wondering if the amulet was placed here intentionally as a gift—or a trap.")
                .exit("north", "Forest Clearing")
                .exit("south", "The Mortal Lands")
                .item("magic amulet"),
        ))
        .location(
            LocationDraft::new("The Mortal Lands", "You continue along the path, and the thick trees gradually give way to open space. As you emerge from the edge of the forest, the Mortal Lands unfold before you—rolling green hills stretch under a vast, open sky. Small villages are scattered across the landscape, nestled between fields and winding rivers. The scene is peaceful, yet an unseen barrier holds you back, the magic pressing against you like a wall. Just as you start to turn back, something catches your eye—half-buried in the grass, a small, glowing Faerie Token rests near the tree line, its faint light pulsing with ancient magic. Perhaps this is the key to crossing into Prythian.")
                .exit("north", "Forest")
                .item("faerie token"),
        )
        // Arrival at the goal ends the game, so the Spring Court keeps
        // no onward exits.
        .location(LocationDraft::new("Spring Court", "Lush meadows stretch under a golden sun, surrounded by vibrant forests alive with birdsong. The air is thick with the scent of blossoms, and clear streams wind through the land. Though peaceful, a wild energy hums beneath the surface, hinting at untamed secrets."))
        .build()
}

/// The scenario rules and prose for the bundled adventure.
pub fn scenario() -> Scenario {
    Scenario {
        title: "A Court of Thorns and Roses".to_string(),
        start: "The Wall".to_string(),
        goal: "Spring Court".to_string(),
        opening: vec![
            Line::tinted("Your journey to the Spring Court begins here.", Tint::Green).emphasized(),
            Line::plain("You stand in the shadow of The Wall, its towering presence both ancient and foreboding. The air hums with faint traces of magic, a reminder that just beyond this invisible barrier lies the faerie realm of Prythian—specifically, the Spring Court, a place of both beauty and danger. The Mortal Lands stretch behind you, but your heart is set on what lies ahead. Crossing the Wall comes at a great cost, but you know it’s the only way to reach the Spring Court. The choice is yours."),
        ],
        victory: vec![
            Line::plain("As you step through the Wall, the world shifts. The heavy gloom of the forest lifts, replaced by the warmth of eternal spring. Lush meadows stretch out, dotted with vibrant wildflowers, while sunlight filters through the green canopy. A clear stream winds through the landscape, and the air is filled with the sweet scent of blossoms and birdsong."),
            Line::plain("The warmth of the Spring Court embraces you as you step through the Wall. You take a breath and feel the magic all around you."),
            Line::tinted("You've made it to the Spring Court, but your journey has only just begun.", Tint::Green).emphasized(),
        ],
        bargain: BargainRule {
            location: "Bargaining with the Wall Faerie".to_string(),
            trigger: "accept".to_string(),
            success: vec![
                Line::plain("The faerie’s smile falters as dark magic swirls around you. The amulet around your neck flares with light, shielding you from the curse. The faerie scowls but waves their hand, opening a shimmering passage through the Wall."),
                Line::plain("'It seems you’re protected, mortal. Safe passage, for now,' they mutter, disappearing as you step into the Spring Court, unharmed."),
            ],
            failure: vec![
                Line::plain("The faerie’s grin widens as you accept. Dark magic wraps around you, sharp and cold. A curse sinks into your soul, freezing you in place."),
                Line::plain("'You should’ve known better,' the faerie whispers. 'You’ll remain here, bound to me forever'. The world fades as you realize you’re trapped in the faerie’s thrall for eternity."),
                Line::tinted("The faerie’s smile fades into something darker as the curse takes hold. Your strength drains away, and you realize too late that the bargain was a trap. Bound to the fae, your life slips away, claimed by forces beyond your control.", Tint::Red),
            ],
        },
        crossing: CrossingRule {
            location: "East Wall".to_string(),
            trigger: "cross".to_string(),
            token: "faerie token".to_string(),
            success: Line::plain("You hold up the faerie token, and the magic around the gap in the Wall shimmers and parts, allowing you to pass through safely."),
            failure: Line::plain("You attempt to squeeze through the gap, but an invisible force repels you. It seems you need something special to pass through here."),
        },
        beast: BeastRule {
            location: "Dark Forest".to_string(),
            weapon: "iron dagger".to_string(),
            ambush: Line::plain(DARK_FOREST),
            victory: Line::plain("You draw the iron dagger, the weight of the weapon steadying your hand. The beast lunges, but the moment the iron blade slices through the air, the creature recoils, howling in pain. With a final blow, the beast falls, and the forest falls silent once more. The dagger’s iron edge has saved your life."),
            defeat: vec![
                Line::plain("The beast lunges at you with terrifying speed. You try to fight back, but without a weapon strong enough to pierce its hide, your efforts are futile. The beast’s jaws close in, and you realize too late that you have no way to defend yourself."),
                Line::tinted("The beast’s final strike lands with brutal force, and the world around you fades into darkness. The forest falls silent, and your journey ends here, lost to the shadows.", Tint::Red),
            ],
        },
        ward: WardRule {
            item: "magic amulet".to_string(),
            flag: "wearing amulet".to_string(),
            donned: Line::plain("You put the magic amulet on. You feel a protective aura surround you."),
        },
    }
}

/// Build a ready-to-play session over the bundled story.
pub fn session() -> FictionResult<Session> {
    Ok(Session::new(world()?, scenario())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::Transcript;
    use crate::session::{Ending, Outcome};

    fn play(session: &mut Session, transcript: &mut Transcript, inputs: &[&str]) -> Outcome {
        let mut outcome = Outcome::Continue;
        for input in inputs {
            outcome = session.handle(input, transcript);
        }
        outcome
    }

    #[test]
    fn the_story_world_builds() {
        let world = world().unwrap();
        assert_eq!(world.len(), 12);
        assert!(world.find("Spring Court").is_some());
        assert!(world.find("the mortal lands").is_some());
    }

    #[test]
    fn the_story_session_wires_up() {
        let session = session().unwrap();
        assert_eq!(session.scenario().title, "A Court of Thorns and Roses");
        assert_eq!(session.world().get(session.player().location).name, "The Wall");
    }

    #[test]
    fn taking_the_dagger_then_beating_the_beast() {
        let mut session = session().unwrap();
        let mut transcript = Transcript::new();

        // South twice to the Forest Clearing, where the dagger lies.
        play(&mut session, &mut transcript, &["south", "south"]);
        transcript.clear();

        session.handle("take iron dagger", &mut transcript);
        assert_eq!(transcript.texts(), vec!["You have taken the iron dagger."]);
        assert_eq!(session.player().inventory.len(), 1);
        assert!(session.player().holds("iron dagger"));

        transcript.clear();
        let outcome = session.handle("east", &mut transcript);
        assert_eq!(outcome, Outcome::Continue);
        assert!(transcript.contains("The dagger’s iron edge has saved your life."));
        assert_eq!(session.world().get(session.player().location).name, "Dark Forest");
        assert!(session.ending().is_none());
    }

    #[test]
    fn entering_the_dark_forest_unarmed_is_fatal() {
        let mut session = session().unwrap();
        let mut transcript = Transcript::new();

        let outcome = play(&mut session, &mut transcript, &["south", "south", "east"]);
        assert_eq!(outcome, Outcome::Ended(Ending::Lost));
        assert!(transcript.contains("you have no way to defend yourself"));
        assert_eq!(transcript.endings(), 1);
    }

    #[test]
    fn listen_where_no_listen_action_exists() {
        let mut session = session().unwrap();
        let mut transcript = Transcript::new();

        // The Mortal Lands define no actions at all.
        play(
            &mut session,
            &mut transcript,
            &["south", "south", "south", "south"],
        );
        assert_eq!(session.world().get(session.player().location).name, "The Mortal Lands");
        transcript.clear();

        session.handle("listen", &mut transcript);
        assert_eq!(transcript.texts(), vec!["Nothing happens."]);
        assert_eq!(session.world().get(session.player().location).name, "The Mortal Lands");
        assert!(session.player().inventory.is_empty());
    }

    #[test]
    fn crossing_the_east_wall_without_the_token_fails_in_place() {
        let mut session = session().unwrap();
        let mut transcript = Transcript::new();

        play(&mut session, &mut transcript, &["east"]);
        transcript.clear();

        let outcome = session.handle("cross", &mut transcript);
        assert_eq!(outcome, Outcome::Continue);
        assert!(transcript.contains("an invisible force repels you"));
        assert_eq!(session.world().get(session.player().location).name, "East Wall");
    }

    #[test]
    fn the_token_route_wins() {
        let mut session = session().unwrap();
        let mut transcript = Transcript::new();

        let outcome = play(
            &mut session,
            &mut transcript,
            &[
                "south",
                "south",
                "south",
                "south",
                "take faerie token",
                "north",
                "north",
                "north",
                "east",
                "north",
                "cross",
            ],
        );

        assert_eq!(outcome, Outcome::Ended(Ending::Won));
        assert_eq!(session.ending(), Some(Ending::Won));
        assert!(transcript.contains("You hold up the faerie token"));
        assert!(transcript.contains("You've made it to the Spring Court"));
        assert_eq!(transcript.endings(), 1);
        assert_eq!(session.world().get(session.player().location).name, "Spring Court");
    }

    #[test]
    fn bargaining_without_the_amulet_loses() {
        let mut session = session().unwrap();
        let mut transcript = Transcript::new();

        let outcome = play(
            &mut session,
            &mut transcript,
            &["west", "approach", "bargain", "accept"],
        );

        assert_eq!(outcome, Outcome::Ended(Ending::Lost));
        assert!(transcript.contains("You should’ve known better"));
        assert_eq!(transcript.endings(), 1);
    }

    #[test]
    fn the_bargain_route_wins_while_warded() {
        let mut session = session().unwrap();
        let mut transcript = Transcript::new();

        let outcome = play(
            &mut session,
            &mut transcript,
            &[
                "south",
                "south",
                "south",
                "take magic amulet",
                "wear magic amulet",
                "north",
                "north",
                "north",
                "west",
                "approach",
                "bargain",
                "accept",
            ],
        );

        assert_eq!(outcome, Outcome::Ended(Ending::Won));
        assert!(session.player().has_flag("wearing amulet"));
        assert!(transcript.contains("It seems you’re protected, mortal"));
        assert!(transcript.contains("You've made it to the Spring Court"));
    }

    #[test]
    fn wearing_the_dagger_is_rejected() {
        let mut session = session().unwrap();
        let mut transcript = Transcript::new();

        play(
            &mut session,
            &mut transcript,
            &["south", "south", "take iron dagger"],
        );
        transcript.clear();

        session.handle("wear iron dagger", &mut transcript);
        assert_eq!(transcript.texts(), vec!["You can't wear the iron dagger."]);
        assert!(!session.player().has_flag("wearing amulet"));
    }

    #[test]
    fn retreating_from_the_faerie_is_allowed() {
        let mut session = session().unwrap();
        let mut transcript = Transcript::new();

        play(&mut session, &mut transcript, &["west", "approach"]);
        transcript.clear();

        let outcome = session.handle("retreat", &mut transcript);
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(session.world().get(session.player().location).name, "West Wall");
    }

    #[test]
    fn wall_actions_answer_everywhere_along_the_wall() {
        let mut session = session().unwrap();
        let mut transcript = Transcript::new();

        session.handle("listen", &mut transcript);
        assert!(transcript.contains("faint sounds beyond the Wall"));

        play(&mut session, &mut transcript, &["east"]);
        transcript.clear();
        session.handle("feel", &mut transcript);
        assert!(transcript.contains("The magic hums under your skin"));
    }
}
