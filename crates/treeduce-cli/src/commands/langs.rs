//! List compiled-in grammars.

pub fn run() {
    for lang in treeduce_langs::all() {
        println!("{}", lang.name());
    }
}
