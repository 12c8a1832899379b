use rand::Rng;
use rand::seq::SliceRandom;

/// Greetings shown when the widget is opened on an empty transcript.
pub const DEFAULT_GREETINGS: &[&str] = &[
    "Hello! Welcome to MedScan.AI. How can I assist you today?",
    "Hi there! I'm here to help you with medical imaging questions and \
     navigation.",
    "Greetings! Ask me anything about our medical AI system or how to use \
     the site.",
];

/// Picks one greeting uniformly at random.
pub(crate) fn choose_greeting<'a, R: Rng + ?Sized>(
    greetings: &'a [String],
    rng: &mut R,
) -> &'a str {
    greetings
        .choose(rng)
        .map(String::as_str)
        .unwrap_or(DEFAULT_GREETINGS[0])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_choose_greeting() {
        let greetings: Vec<String> =
            DEFAULT_GREETINGS.iter().map(|g| g.to_string()).collect();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let greeting = choose_greeting(&greetings, &mut rng);
            assert!(DEFAULT_GREETINGS.contains(&greeting));
        }
        assert_eq!(choose_greeting(&[], &mut rng), DEFAULT_GREETINGS[0]);
    }
}
