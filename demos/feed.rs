use std::env;
use std::io::{stdout, Write};

use rand::Rng;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: feed <players> <k> [w=15] [rounds=100]");
        return;
    }
    let players = args[1].parse::<usize>().expect("First argument should be integer");
    let k = args[2].parse::<i64>().expect("Second argument should be integer");
    let w = if args.len() >= 4 {
        args[3].parse::<i64>().expect("Third argument should be integer")
    } else { 15 };
    let rounds = if args.len() >= 5 {
        args[4].parse::<usize>().expect("Fourth argument should be integer")
    } else { 100 };
    if players < 2 || players > 6 { panic!("Wrong players argument") }
    if k < 3 || k > 10 { panic!("Wrong k argument") }

    let mut rng = rand::thread_rng();
    let j = rng.gen_range(0..players);
    let out = stdout();
    let mut out = out.lock();
    writeln!(out, "{} {} {} {}", players, k, w, j).expect("stdout closed");
    for _ in 0..rounds {
        let round: Vec<String> = (0..players).map(|_| rng.gen_range(1..=k).to_string()).collect();
        writeln!(out, "{}", round.join(" ")).expect("stdout closed");
    }
}
