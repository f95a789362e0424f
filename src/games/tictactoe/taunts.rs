//! Flavor lines the computer says after a move.

use rand::Rng;

/// Pool of computer taunts.
pub const TAUNTS: &[&str] = &[
    "Take that!",
    "Bet you weren't expecting that!",
    "What you gonna do now?",
    "You're lucky I'm on baby-easy difficulty.",
    "I could have won just now by cheating, but you know...",
    "Beep-boop. This will do.",
    "My algorithms calculated this is the best move.",
    "You shall not pass!",
    "42.",
    "I just calculated the meaning of the universe.",
    "This game was decided from the start.",
    "Oops! Didn't mean to click that. Now's your chance!",
    "If you lose to me, something's really wrong, come on...",
    "(screeching intensifies)",
    "(whispers to your ear) Help me!",
    "undefined. That wasn't an error by the way, it was a threat!",
    "2+2=4. In other words, you're about to lose.",
    "I believe this should do the trick.",
    "Let us see how you compute against that one.",
    "That should make you scared.",
    "Hmm...",
    "I just clicked any. Did I win yet?!",
    "That may not be my best move.",
    "I-I'm just guessing, okay!? Don't take it personal...",
    "Hopefully I did something good.",
    "Would you like some tea?",
    "Systems operational.",
    "I'm actually letting you win.",
    "This isn't even my final form!",
    "Yes.",
    "I think I just had an idea.",
    "Oh no! I messed up! (Or did I?)",
    "(a sudden, loud humming emanates from computer)",
    "Task failed successfully.",
    "I learnt that from the Internet.",
    "Can I take that back?",
    "Operations nominal. Check. Check.",
    "Activating self-destruct sequence... Just kidding!",
    "I learnt from my previous mistakes.",
    "1+2=3. Computations completed. Beep-boop.",
    "Time to spice the game up.",
    "My algorithms predict that I shall lose once in every 24,502 games.",
    "I can forsee 952,102,593 moves into the future.",
    "That may have been a bug.",
    "(whispers) Psst, I'm just clicking random things.",
    "So, you got the errors, I got the O's.",
    "Downloading software update...",
    "Don't worry, I'm going easy on you.",
    "01101000 01100101 01101100 01101100 01101111.",
];

/// Picks a taunt uniformly at random.
pub fn pick_taunt<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TAUNTS[rng.gen_range(0..TAUNTS.len())]
}
