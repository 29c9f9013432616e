use argtree::{Config, FileMode, Parser};
use std::io::{Read, Write};

fn main() {
    let mut parser = Parser::new("Copies or inspects files.").name("files");
    let verbose = parser
        .root_mut()
        .flag("v", "verbose", Config::default().help("Report what happens."))
        .unwrap();

    let copy = parser
        .root_mut()
        .command("copy", "Copy one file onto another.")
        .unwrap();
    let source = parser
        .command_mut(copy)
        .file("", "source", Config::default().positional().help("Read from here."))
        .unwrap();
    let target = parser
        .command_mut(copy)
        .file(
            "o",
            "output",
            Config::default()
                .required()
                .file_mode(FileMode::Write)
                .help("Write to here."),
        )
        .unwrap();

    let inspect = parser
        .root_mut()
        .command("inspect", "Describe files.")
        .unwrap();
    let unit = parser
        .command_mut(inspect)
        .selector(
            "u",
            "unit",
            ["bytes", "lines"],
            Config::default().default_string("bytes").help("What to count."),
        )
        .unwrap();
    let paths = parser
        .command_mut(inspect)
        .file_list("f", "file", Config::default().help("A file to describe."))
        .unwrap();

    parser.parse();

    if parser.happened(copy) {
        let (Some(mut source), Some(mut target)) = (source.take(), target.take()) else {
            eprintln!("Nothing to copy.");
            std::process::exit(1);
        };
        let mut content = Vec::default();
        source
            .read_to_end(&mut content)
            .and_then(|_| target.write_all(&content))
            .unwrap();

        if verbose.get() {
            println!("Copied {} bytes.", content.len());
        }
    } else if parser.happened(inspect) {
        let unit = unit.get().unwrap_or_default();

        for (index, mut file) in paths.take().into_iter().enumerate() {
            let mut content = String::default();
            file.read_to_string(&mut content)
                .unwrap();
            let count = match unit.as_str() {
                "lines" => content.lines().count(),
                _ => content.len(),
            };
            println!("#{index}: {count} {unit}");
        }
    }
}
