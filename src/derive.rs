//! Derive Api for `declargs` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with a parameter struct `S` instrumented with `#[derive(DeclargsParser)]`.
//! This will generate a function `S::declargs_parse() -> S` which parses the Cli parameters fitting `S`.
//! `declargs` will do its best to infer the intended Cli from the parameter structure `S`.
//!
//! This page includes a few demos on using the derive Api.
//! More examples are outlined in [the source](https://github.com/sawatzkylindsey/declargs/tree/main/demos).
//!
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ demo_derived -h
//! usage: demo_derived [-h] [-b] [--daikon-root DAIKON_ROOT] APPLE CARROTS [...]
//!
//! positional arguments:
//!  APPLE
//!  CARROTS [...]
//!
//! options:
//!  -h, --help                        Show this help message and exit.
//!  -b, --[no-]banana                 (default false)
//!  --daikon-root DAIKON_ROOT, --dr
//! ```
//!
//! Notice the inferred ergonomics: the option names are dashed versions of the field names, the switch carries its inverted `--no-..` form and initial value, and the shortcuts (`-b`, `--dr`) are derived automatically.
//!
//! ### Parser Configuration
//! The parameter struct `S` must implement [`Default`]; `declargs_parse` starts from `S::default()` and assigns onto it (see **Defaults & Initials** on the [documentation root](../index.html)).
//! The struct may be configured with the following attributes:
//! * `#[declargs(program = "..")]` sets the Cli program name.
//! When unspecified, the program name falls back to `env!("CARGO_CRATE_NAME")`.
//! * `#[declargs(about = "..")]` sets the program description displayed via `--help`.
//! * `#[declargs(show = line)]` (or `show = table`, `show = tree`) echoes the parsed parameters right after parsing, rendered via [render_line](../fn.render_line.html), [render_table](../fn.render_table.html), or [render_tree](../fn.render_tree.html), respectively.
//!
//! Additionally, every instrumented struct receives a [Summary](../trait.Summary.html) implementation over its plain parameters, which you may render manually instead of using `show`.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_show.rs")]
//! ```
//!
//! ```console
//! $ greeter --greeting Howdy World
//! Parameters(name="World", greeting="Howdy")
//! Howdy, World!
//! ```
//!
//! ### SubParser Configuration
//! Sub-command structs are instrumented with `#[derive(DeclargsSubParser)]`, and follow the same parameter configuration rules as a `DeclargsParser`.
//! A sub parser takes neither `program`/`about`/`show` attributes nor `command = ..` fields; it only describes the parameters of a single sub-command.
//!
//! When the root struct branches (via `#[declargs(command = ..)]`), `declargs_parse` returns the root struct *and* each sub-command struct, in declaration order:
//! ```ignore
//! let (parameters, sub_0, sub_1) = Parameters::declargs_parse();
//! ```
//! Only the sub-command struct selected on the Cli will have been parsed into; the others remain at their `default()`.
//!
//! ### Parameter Configuration
//! The implicit Cli inference uses the following rules:
//! ```console
//! Type        | Parameter
//! ------------------------------------------------------------------------
//! Option<T>   | Parameter::option(Optional::new(..), ..)
//! Vec<T>      | Parameter::argument(Collection::new(.., Nargs::AtLeastOne), ..)
//! HashSet<T>  | Parameter::argument(Collection::new(.., Nargs::AtLeastOne), ..)
//! bool        | Parameter::option(Switch::new(.., true).negation(false), ..)
//! T           | Parameter::argument(Scalar::new(..) , ..)
//! ```
//!
//! Notice, these implicit rules do not capture all possible `declargs` configurations.
//! Therefore, we provide the additional explicit configuration field attributes, which may be combined as necessary.
//! * `#[declargs(argument)]` or `#[declargs(option)]` to explicitly use `Parameter::argument(..)` or `Parameter::option(..)`, respectively.
//! Only one of these may be used on the same field.
//! * `#[declargs(short = C)]` to explicitly set the short name for an option parameter.
//! `C` must be a char value (ex: `'c'`).
//! * `#[declargs(collection = N)]` to explicitly use `Collection::new(.., N)`, where `N` is the [Nargs](../enum.Nargs.html) variant.
//! This is useful both for non-`Vec`/`HashSet` [Collectable](../prelude/trait.Collectable.html) types, as well as to control the `Nargs` variant.
//! * `#[declargs(factory = F)]` to convert the tokens via `F` instead of `std::str::FromStr`, where `F` has the signature `fn(&str) -> Result<T, String>`.
//! * `#[declargs(command = (Vi, Si), .., command = (Vj, Sj))]` to define sub-command [branches](../struct.CommandLineParser.html#method.branch) on the pairs `(Vi, Si), .., (Vj, Sj)`.
//! Each pair must be the variant `V*` and sub-parameter struct `S*` to configure.
//! `S*` must be instrumented with `#[derive(DeclargsSubParser)]`.
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Default, DeclargsParser)]
//! struct Parameters {
//!     #[declargs(argument)]
//!     quick: usize,
//!     // the above generates:
//!     //  .add(Parameter::argument(Scalar::new(&mut parameters.quick), "quick"))
//!
//!     #[declargs(option)]
//!     brown: usize,
//!     // the above generates:
//!     //  .add(Parameter::option(Scalar::new(&mut parameters.brown), "brown", None))
//!
//!     #[declargs(option, short = 'f')]
//!     fox: usize,
//!     // the above generates:
//!     //  .add(Parameter::option(Scalar::new(&mut parameters.fox), "fox", Some('f')))
//!
//!     #[declargs(collection = Nargs::Precisely(2))]
//!     jumps: Pair<usize>,
//!     // the above generates:
//!     //  .add(Parameter::argument(Collection::new(&mut parameters.jumps, Nargs::Precisely(2)), "jumps"))
//!     // assumes: `impl<T> Collectable<T> for Pair<T>`
//!
//!     #[declargs(factory = from_percent)]
//!     lazy: u32,
//!     // the above generates:
//!     //  .add(Parameter::argument(Scalar::new(&mut parameters.lazy).factory(from_percent), "lazy"))
//!
//!     #[declargs(command = (0, Sub0), command = (1, Sub1))]
//!     over: usize,
//!     // the above generates:
//!     //  .branch(Condition::new(Scalar::new(&mut parameters.over), "over"))
//!     //  .command(0, Sub0::setup_command(&mut sub_0))  // assuming `Sub0` is instrumented with `DeclargsSubParser`
//!     //  .command(1, Sub1::setup_command(&mut sub_1))  // assuming `Sub1` is instrumented with `DeclargsSubParser`
//! }
//!
//! #[derive(Default, DeclargsSubParser)]
//! struct Sub0 {
//!     ..
//! }
//!
//! #[derive(Default, DeclargsSubParser)]
//! struct Sub1 {
//!     ..
//! }
//! ```
//!
//! ### Help Messages
//! The previous implicit and explicit rules are sufficient to configure all possible `declargs` Cli semantics.
//! Additionally, the following field attributes may be used to configure the Cli help message.
//! * `#[declargs(help = "..")]` defines the help message for the parameter.
//! This value is passed directly via the "help" documentation mechanism ([parameter help](../struct.Parameter.html#method.help) or [condition help](../struct.Condition.html#method.help)).
//! For options, the initial value of the field is appended to the help message (ex: `(default false)`).
//! * `#[declargs(choices)]` instructs `declargs` to use the choice function generated by instrumenting the enum struct with `#[derive(DeclargsChoices)]`.
//! See defining choices on a [parameter](../struct.Parameter.html#method.choice) or [condition](../struct.Condition.html#method.choice) for how this affects the Cli help message.
//! * `#[declargs(choices = F)]` instructs `declargs` to use the choice function `F`.
//! This has the same meaning as the previous point.
//!
//! The noted two `choices` attributes leverage functions of the signature `fn my_func(value: Parameter<T>) -> Parameter<T>`, where:
//! * `T` is the concrete type of the field under instrumentation.
//!
//! For example: `fn my_func(value: Parameter<usize>) -> Parameter<usize>`.
//! Notice, if `choices` is applied to a sub-command branching field (`#[declargs(command = ..)]`), then instead use `fn my_func(value: Condition<T>) -> Condition<T>`.
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Default, DeclargsParser)]
//! struct Parameters {
//!     #[declargs(help = "do something")]
//!     lazy: usize,
//!     // the above generates:
//!     //  .add(Parameter::argument(Scalar::new(&mut parameters.lazy), "lazy")
//!     //      .help("do something"))
//!
//!     #[declargs(choices)]
//!     dog: Enumeration,
//!     // the above generates:
//!     //  .add(Enumeration::setup_choices(Parameter::argument(Scalar::new(&mut parameters.dog), "dog")))
//!     // assumes: `Enumeration` is instrumented with `DeclargsChoices`
//!
//!     #[declargs(choices = setup_choices)]
//!     period: usize,
//!     // the above generates:
//!     //  .add(setup_choices(Parameter::argument(Scalar::new(&mut parameters.period), "period")))
//! }
//!
//! /// My custom setup_choices fn.
//! fn setup_choices(value: Parameter<usize>) -> Parameter<usize> {
//!     value.choice(0, "the 0th choice")
//!         .choice(1, "the 1st choice")
//!         .choice(2, "the 2nd choice")
//! }
//!
//! #[derive(DeclargsChoices)]
//! enum Enumeration {
//!     ..
//! }
//! ```
//!
//! ### Choices
//! In the case of enums, simply instrument with `#[derive(DeclargsChoices)]` to automatically generate the setup function.
//! The enum may be configured with the following field attributes:
//! * `#[declargs(help = "..")]` defines the help message for the variant.
//! * `#[declargs(hidden)]` instructs `declargs` to hide the variant.
//!
//! For example:
//! ```ignore
//! #[derive(DeclargsChoices)]
//! enum Enumeration {
//!     VariantA,
//!     // the above generates:
//!     //  .choice(VariantA, "")
//!
//!     #[declargs(help = "the variant B choice")]
//!     VariantB,
//!     // the above generates:
//!     //  .choice(VariantB, "the variant B choice")
//!
//!     #[declargs(hidden)]
//!     VariantC,
//!     // the above does *not* instrument a `.choice(..)`
//! }
//! ```

pub use declargs_derive::*;
