    // Shared by every policy's test module; the including module provides `policy()`.

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    use crate::input::{Setup, TokenReader};

    fn play_text(text: &str, seed: u64) -> (u64, Vec<Submission>) {
        let mut reader = TokenReader::new(Cursor::new(text.as_bytes().to_vec()));
        let setup = Setup::read(&mut reader).unwrap();
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let rounds = crate::strategy::play(&mut policy(), &setup, &mut reader, &mut out, &mut rng).unwrap();
        let decisions = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| l.parse::<Submission>().unwrap())
            .collect();
        (rounds, decisions)
    }

    #[test]
    fn common_decisions_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut p = policy();
        for k in 1..=12 {
            for _ in 0..500 {
                let d = p.next_decision(k, &mut rng);
                assert!(1 <= d && d <= k, "decision {} outside 1..={}", d, k);
            }
        }
    }

    #[test]
    fn common_k_one_leaves_no_choice() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut p = policy();
        for _ in 0..100 {
            assert_eq!(p.next_decision(1, &mut rng), 1);
        }
    }

    #[test]
    fn common_one_line_per_round() {
        let (rounds, decisions) = play_text("4 8 15 2\n1 2 3 4\n-1 0 0 -1\n8 8\n8 8\n", 11);
        assert_eq!(rounds, 4);
        assert_eq!(decisions.len(), 4);
        assert!(decisions.iter().all(|d| (1..=8).contains(d)));
    }

    #[test]
    fn common_same_seed_same_game() {
        let text = "2 10 20 0\n1 1\n2 2\n3 3\n4 4\n5 5\n";
        assert_eq!(play_text(text, 99), play_text(text, 99));
    }
