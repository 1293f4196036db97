use declargs::{
    derive::*, Collection, CommandLineParser, Entry, Nargs, Optional, Parameter, Scalar, Summary,
    Switch,
};

#[derive(Debug, Default, DeclargsParser)]
struct Parameters {
    apple: usize,
    banana: bool,
    carrots: Vec<u32>,
    daikon_root: Option<String>,
}

fn main() {
    let parameters = Parameters::declargs_parse();
    println!("{parameters:?}");
}
