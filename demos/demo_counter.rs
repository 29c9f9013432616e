use argtree::{Config, Parser};

fn main() {
    let mut parser = Parser::new("Counts how loud to be, then greets.").name("counter");
    let verbose = parser
        .root_mut()
        .counter("v", "verbose", Config::default().help("Say more (repeatable)."))
        .unwrap();
    let quiet = parser
        .root_mut()
        .flag("q", "quiet", Config::default().help("Say nothing."))
        .unwrap();
    let name = parser
        .root_mut()
        .string(
            "",
            "name",
            Config::default()
                .positional()
                .help("Who to greet.")
                .default_string("world"),
        )
        .unwrap();

    parser.parse();

    if quiet.get() {
        return;
    }

    let name = name.get().unwrap_or_default();
    let excitement = "!".repeat(verbose.get().clamp(0, 9) as usize + 1);
    println!("Hello {name}{excitement}");
}
