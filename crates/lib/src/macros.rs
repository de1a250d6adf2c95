/// Read the input file for a solution.
///
/// `$path` is looked up under the `inputs` directory of the package invoking
/// the macro and errors are reported against `inputs/$path`.
#[macro_export]
macro_rules! input {
    ($path:literal) => {
        $crate::input::read(
            concat!("inputs/", $path),
            concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path),
        )?
    };
}

/// Build a `main` function around a solution.
///
/// The solution takes the loaded [Input][crate::input::Input] and returns
/// the answers to both parts, which are written in order once both are
/// known. With `expect`, answers which differ from the given ones are
/// reported as an error instead.
///
/// ```ignore
/// lib::entry!(input = "d03.txt", expect = (4361, 467835), solve);
///
/// fn solve(input: &Input) -> Result<(u64, u64)> {
///     todo!()
/// }
/// ```
#[macro_export]
macro_rules! entry {
    (input = $path:literal, expect = $expect:expr, $solve:path $(,)?) => {
        $crate::entry!(@main $path, ($expect), $solve);
    };
    (input = $path:literal, $solve:path $(,)?) => {
        $crate::entry!(@main $path, (), $solve);
    };
    (@main $path:literal, ($($expect:expr)?), $solve:path) => {
        fn main() -> $crate::prelude::Result<()> {
            let opts = $crate::cli::Opts::parse()?;
            let input = $crate::input!($path);

            let stdout = ::std::io::stdout();
            let mut o = opts.output(stdout.lock());

            let checked = $solve(&input).and_then(|value| {
                $($crate::cli::check_expected(&value, &$expect)?;)?
                Ok(value)
            });

            match checked {
                Ok((part1, part2)) => {
                    o.answer(1, part1)?;
                    o.answer(2, part2)?;
                }
                Err(error) => {
                    let error = $crate::cli::error_context(input.path(), error);
                    o.error(format_args!("{error:#}"))?;
                    return Err(error);
                }
            }

            Ok(())
        }
    };
}
