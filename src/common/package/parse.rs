//! Parsers for the listing output of each backend.
//!
//! Backend output is an undocumented text table that drifts between tool
//! versions. Every parser drops a line it cannot read and keeps going; one
//! bad line never costs the rest of the listing.

use super::{PackageRecord, Source};

/// Parse the captured stdout of `source`'s listing command.
pub fn parse_listing(source: Source, stdout: &str) -> Vec<PackageRecord> {
    match source {
        Source::Pacman | Source::Aur => parse_name_version(source, stdout),
        Source::Flatpak => parse_flatpak(stdout),
        Source::Apt => parse_apt(stdout),
    }
}

/// `pacman -Q` / `<aur helper> -Qm`: one `name version` pair per line.
fn parse_name_version(source: Source, stdout: &str) -> Vec<PackageRecord> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(name), Some(version), None) => {
                    Some(PackageRecord::new(source, name, version))
                }
                _ => None,
            }
        })
        .collect()
}

/// `flatpak list --columns=application,version`: tab separated, with an
/// optional header row.
fn parse_flatpak(stdout: &str) -> Vec<PackageRecord> {
    let lines: Vec<&str> = stdout.lines().collect();
    let start = match lines.first() {
        Some(first) if first.to_lowercase().contains("application") => 1,
        _ => 0,
    };

    lines[start..]
        .iter()
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let name = fields.next()?;
            let version = fields.next()?;
            Some(PackageRecord::new(
                Source::Flatpak,
                name.trim(),
                version.trim(),
            ))
        })
        .collect()
}

/// `apt list --installed`: `name/suite,now version arch [flags]`.
///
/// Lines carrying a `[` annotation are skipped along with anything that has
/// no `/` (the `Listing...` banner, warnings).
fn parse_apt(stdout: &str) -> Vec<PackageRecord> {
    stdout
        .lines()
        .filter(|line| line.contains('/') && !line.contains('['))
        .filter_map(|line| {
            let name = line.split('/').next()?;
            let version = line.split_whitespace().nth(1)?;
            Some(PackageRecord::new(Source::Apt, name, version))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacman_skips_blank_lines() {
        let records = parse_listing(Source::Pacman, "bash 5.2.15-2\n\nvim 9.0.1\n");
        assert_eq!(
            records,
            vec![
                PackageRecord::new(Source::Pacman, "bash", "5.2.15-2"),
                PackageRecord::new(Source::Pacman, "vim", "9.0.1"),
            ]
        );
    }

    #[test]
    fn test_pacman_skips_lines_without_exactly_two_tokens() {
        let stdout = "bash 5.2.15-2\nbroken\ntoo many tokens here\n   \nzsh\t5.9-5\n";
        let records = parse_listing(Source::Pacman, stdout);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["bash", "zsh"]);
        assert_eq!(records[1].version, "5.9-5");
    }

    #[test]
    fn test_aur_records_carry_aur_source() {
        let records = parse_listing(Source::Aur, "spotify 1:1.2.31-1\nvisual-studio-code-bin 1.91.0-1\n");
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.source == Source::Aur));
        assert_eq!(records[0].version, "1:1.2.31-1");
    }

    #[test]
    fn test_flatpak_skips_header_in_any_case() {
        for header in ["Application ID\tVersion", "application\tversion", "APPLICATION\tVERSION"] {
            let stdout = format!("{header}\norg.gimp.GIMP\t2.10.38\n");
            let records = parse_listing(Source::Flatpak, &stdout);
            assert_eq!(
                records,
                vec![PackageRecord::new(Source::Flatpak, "org.gimp.GIMP", "2.10.38")]
            );
        }
    }

    #[test]
    fn test_flatpak_without_header_keeps_first_line() {
        let stdout = "org.gimp.GIMP\t2.10.38\ncom.spotify.Client\t1.2.31\n";
        let records = parse_listing(Source::Flatpak, stdout);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "org.gimp.GIMP");
    }

    #[test]
    fn test_flatpak_trims_fields_and_skips_short_lines() {
        let stdout = "org.gimp.GIMP \t 2.10.38 \tsystem\nno-tab-here\n\norg.kde.krita\t\n";
        let records = parse_listing(Source::Flatpak, stdout);
        assert_eq!(
            records,
            vec![
                PackageRecord::new(Source::Flatpak, "org.gimp.GIMP", "2.10.38"),
                PackageRecord::new(Source::Flatpak, "org.kde.krita", ""),
            ]
        );
    }

    #[test]
    fn test_apt_filters_banner_and_annotated_lines() {
        let stdout = "Listing...\n\
            htop/jammy 3.0.5-7build2 amd64\n\
            bash/jammy,now 5.1-6ubuntu1 amd64 [installed]\n\
            libc6/jammy-updates 2.35-0ubuntu3.8 amd64\n\
            WARNING: apt does not have a stable CLI interface.\n";
        let records = parse_listing(Source::Apt, stdout);
        assert_eq!(
            records,
            vec![
                PackageRecord::new(Source::Apt, "htop", "3.0.5-7build2"),
                PackageRecord::new(Source::Apt, "libc6", "2.35-0ubuntu3.8"),
            ]
        );
    }

    #[test]
    fn test_apt_skips_line_without_version_token() {
        let records = parse_listing(Source::Apt, "orphan/jammy\nvim/jammy 2:8.2 amd64\n");
        assert_eq!(records, vec![PackageRecord::new(Source::Apt, "vim", "2:8.2")]);
    }

    #[test]
    fn test_empty_output() {
        for source in Source::ALL {
            assert!(parse_listing(source, "").is_empty());
        }
    }
}
