use std::path::PathBuf;

/// What the binary was asked to do.
#[derive(Debug, PartialEq, Eq)]
pub struct CliArgs {
    /// Posts folder given on the command line; falls back to the config file.
    pub posts_path: Option<PathBuf>,
    /// Open this post's deck straight away instead of the post list.
    pub open_slug: Option<String>,
    /// Print the sections of this post as JSON instead of opening the viewer.
    pub dump_slug: Option<String>,
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} [posts-folder-path] [--open <slug> | --dump <slug>]")
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut posts_path = None;
    let mut open_slug = None;
    let mut dump_slug = None;
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--open" => {
                let slug = args
                    .next()
                    .ok_or_else(|| "--open requires a post slug".to_string())?;
                open_slug = Some(slug);
            }
            "--dump" => {
                let slug = args
                    .next()
                    .ok_or_else(|| "--dump requires a post slug".to_string())?;
                dump_slug = Some(slug);
            }
            flag if flag.starts_with("--") => return Err(format!("Unknown option {flag}")),
            _ if posts_path.is_some() => {
                return Err(format!("Unexpected argument {arg}"));
            }
            _ => posts_path = Some(PathBuf::from(arg)),
        }
    }

    Ok(CliArgs {
        posts_path,
        open_slug,
        dump_slug,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_arguments() {
        assert_eq!(
            parse_args(Vec::<String>::new()).unwrap(),
            CliArgs {
                posts_path: None,
                open_slug: None,
                dump_slug: None
            }
        );
    }

    #[test]
    fn posts_path_only() {
        let args = parse_args(["/srv/posts"]).unwrap();
        assert_eq!(args.posts_path, Some(PathBuf::from("/srv/posts")));
        assert_eq!(args.dump_slug, None);
    }

    #[test]
    fn dump_before_or_after_path() {
        let a = parse_args(["/srv/posts", "--dump", "kyoto"]).unwrap();
        let b = parse_args(["--dump", "kyoto", "/srv/posts"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.dump_slug.as_deref(), Some("kyoto"));
    }

    #[test]
    fn open_takes_a_slug() {
        let args = parse_args(["--open", "first-post"]).unwrap();
        assert_eq!(args.open_slug.as_deref(), Some("first-post"));
        assert_eq!(args.posts_path, None);
        assert!(parse_args(["--open"]).is_err());
    }

    #[test]
    fn dump_without_slug_is_an_error() {
        assert!(parse_args(["--dump"]).is_err());
    }

    #[test]
    fn two_paths_is_an_error() {
        assert!(parse_args(["a", "b"]).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert_eq!(
            parse_args(["--verbose"]).unwrap_err(),
            "Unknown option --verbose"
        );
    }
}
