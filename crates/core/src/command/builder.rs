use std::path::Path;

use tracing::debug;

use crate::command::TransformCommand;
use crate::options::TransformOptions;

/// Parser mode passed to jscodeshift on every run
const PARSER: &str = "tsx";

/// Dependency directories are never transformed
const IGNORE_NODE_MODULES: &str = "--ignore-pattern=**/node_modules/**";

/// Ignoring everything under `.*/` covers framework build output along
/// with any other intentionally hidden directories.
const IGNORE_HIDDEN: &str = "--ignore-pattern=**/.*/**";

/// Assemble the jscodeshift invocation for one codemod run.
///
/// Argument order is fixed: transform selection, target path, parser
/// mode, the two ignore patterns, then the conditional flags in
/// dry/print/verbose order, then any raw extra arguments
/// (whitespace-split). No side effects.
pub fn build_command(
    codemod_path: &Path,
    target_path: &Path,
    executable: &Path,
    options: &TransformOptions,
) -> TransformCommand {
    let mut args = vec![
        "-t".to_string(),
        codemod_path.display().to_string(),
        target_path.display().to_string(),
        "--parser".to_string(),
        PARSER.to_string(),
        IGNORE_NODE_MODULES.to_string(),
        IGNORE_HIDDEN.to_string(),
    ];

    if options.dry {
        args.push("--dry".to_string());
    }

    if options.print {
        args.push("--print".to_string());
    }

    if options.verbose {
        args.push("--verbose".to_string());
    }

    if let Some(ref extra) = options.jscodeshift_args {
        args.extend(extra.split_whitespace().map(String::from));
    }

    debug!("Built transform args: {:?}", args);
    TransformCommand::new(executable.to_path_buf(), args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn build(options: &TransformOptions) -> Vec<String> {
        build_command(
            Path::new("/pkg/codemods/remove-foo.js"),
            Path::new("/project/src"),
            Path::new("jscodeshift"),
            options,
        )
        .args
    }

    #[test]
    fn test_default_options_produce_fixed_prefix_only() {
        let args = build(&TransformOptions::default());

        assert_eq!(
            args,
            vec![
                "-t",
                "/pkg/codemods/remove-foo.js",
                "/project/src",
                "--parser",
                "tsx",
                "--ignore-pattern=**/node_modules/**",
                "--ignore-pattern=**/.*/**",
            ]
        );
    }

    #[test]
    fn test_conditional_flags_follow_option_state() {
        for dry in [false, true] {
            for print in [false, true] {
                for verbose in [false, true] {
                    let options = TransformOptions::default()
                        .with_dry(dry)
                        .with_print(print)
                        .with_verbose(verbose);
                    let args = build(&options);

                    assert_eq!(args.contains(&"--dry".to_string()), dry);
                    assert_eq!(args.contains(&"--print".to_string()), print);
                    assert_eq!(args.contains(&"--verbose".to_string()), verbose);
                }
            }
        }
    }

    #[test]
    fn test_flag_order_is_stable() {
        let options = TransformOptions::default()
            .with_dry(true)
            .with_print(true)
            .with_verbose(true);
        let args = build(&options);

        let dry = args.iter().position(|a| a == "--dry").unwrap();
        let print = args.iter().position(|a| a == "--print").unwrap();
        let verbose = args.iter().position(|a| a == "--verbose").unwrap();
        assert!(dry < print && print < verbose);
    }

    #[test]
    fn test_ignore_patterns_always_present() {
        for options in [
            TransformOptions::default(),
            TransformOptions::default().with_dry(true).with_verbose(true),
        ] {
            let args = build(&options);
            assert!(args.contains(&IGNORE_NODE_MODULES.to_string()));
            assert!(args.contains(&IGNORE_HIDDEN.to_string()));
        }
    }

    #[test]
    fn test_extra_args_appended_last() {
        let options = TransformOptions::default()
            .with_dry(true)
            .with_jscodeshift_args("--run-in-band --cpus 2");
        let args = build(&options);

        assert_eq!(
            &args[args.len() - 3..],
            ["--run-in-band", "--cpus", "2"]
        );
        assert!(args.contains(&"--dry".to_string()));
    }

    #[test]
    fn test_program_is_the_resolved_executable() {
        let command = build_command(
            Path::new("/pkg/codemods/remove-foo.js"),
            Path::new("/project/src"),
            Path::new("/pkg/node_modules/.bin/jscodeshift"),
            &TransformOptions::default(),
        );

        assert_eq!(
            command.program,
            PathBuf::from("/pkg/node_modules/.bin/jscodeshift")
        );
    }
}
