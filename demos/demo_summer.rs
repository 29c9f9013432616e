use argtree::{Config, Parser};

fn main() {
    let mut parser = Parser::new("Sums numbers.").name("summer");
    let items = parser
        .root_mut()
        .float_list("n", "number", Config::default().help("A number to sum."))
        .unwrap();
    let round = parser
        .root_mut()
        .flag("r", "round", Config::default().help("Round the sum."))
        .unwrap();

    parser.parse();
    let sum: f64 = items.get().iter().sum();

    if round.get() {
        println!("Sum: {}", sum.round());
    } else {
        println!("Sum: {sum}");
    }
}
