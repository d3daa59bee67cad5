use crate::game::action::Move;
use anyhow::Context;
use anyhow::Result;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Append-only round log, one CSV row per round played.
///
/// Creating a `History` truncates the file and writes a fresh header, so
/// each file holds exactly one session. Adaptive agents scan the previous
/// session's file before the new one is created.
#[derive(Debug)]
pub struct History {
    path: PathBuf,
    file: File,
    rounds: usize,
}

impl History {
    pub const HEADER: &'static str = "Round,Player1,Move1,Player2,Move2,Winner";
    pub const TIE: &'static str = "tie";

    pub fn create(path: &Path) -> Result<Self> {
        let mut file = File::create(path)
            .with_context(|| format!("create round history at {}", path.display()))?;
        writeln!(file, "{}", Self::HEADER)
            .with_context(|| format!("write header to {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            rounds: 0,
        })
    }

    /// stamp and write one round, returning its 1-based number
    pub fn append(
        &mut self,
        one: &str,
        x: Move,
        two: &str,
        y: Move,
        winner: Option<&str>,
    ) -> Result<usize> {
        self.rounds += 1;
        writeln!(
            self.file,
            "{},{},{},{},{},{}",
            self.rounds,
            one,
            x,
            two,
            y,
            winner.unwrap_or(Self::TIE)
        )
        .with_context(|| format!("append round {} to {}", self.rounds, self.path.display()))?;
        Ok(self.rounds)
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Scan a history file into its ordered (move, move) rows.
    ///
    /// A missing file is the expected first-run condition and yields no
    /// rows. Rows whose move columns fail to parse are skipped without
    /// disturbing the order of the rest.
    pub fn scan(path: &Path) -> Vec<(Move, Move)> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => {
                log::info!("no round history at {}, starting fresh", path.display());
                return vec![];
            }
        };
        let mut rows = vec![];
        for line in BufReader::new(file).lines().map_while(|l| l.ok()).skip(1) {
            let fields = line.split(',').collect::<Vec<&str>>();
            if fields.len() < 6 {
                log::debug!("skipping malformed history row: {}", line);
                continue;
            }
            match (Move::try_from(fields[2]), Move::try_from(fields[4])) {
                (Ok(x), Ok(y)) => rows.push((x, y)),
                _ => log::debug!("skipping unparseable history row: {}", line),
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("roshambot-{}-{}.csv", tag, std::process::id()))
    }

    #[test]
    fn rows_round_trip_in_order() {
        let path = scratch("order");
        let mut history = History::create(&path).unwrap();
        assert_eq!(
            history
                .append("a", Move::Rock, "b", Move::Scissors, Some("a"))
                .unwrap(),
            1
        );
        assert_eq!(
            history.append("a", Move::Paper, "b", Move::Paper, None).unwrap(),
            2
        );
        assert_eq!(
            History::scan(&path),
            vec![(Move::Rock, Move::Scissors), (Move::Paper, Move::Paper)]
        );
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_scans_empty() {
        assert_eq!(History::scan(Path::new("no-such-history.csv")), vec![]);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let path = scratch("malformed");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "{}", History::HEADER).unwrap();
            writeln!(file, "1,a,rock,b,scissors,a").unwrap();
            writeln!(file, "not a row at all").unwrap();
            writeln!(file, "3,a,lizard,b,rock,b").unwrap();
            writeln!(file, "4,a,paper,b,rock,a").unwrap();
        }
        assert_eq!(
            History::scan(&path),
            vec![(Move::Rock, Move::Scissors), (Move::Paper, Move::Rock)]
        );
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn create_truncates_the_previous_session() {
        let path = scratch("truncate");
        {
            let mut history = History::create(&path).unwrap();
            history.append("a", Move::Rock, "b", Move::Rock, None).unwrap();
        }
        let history = History::create(&path).unwrap();
        assert_eq!(history.rounds(), 0);
        assert_eq!(History::scan(&path), vec![]);
        std::fs::remove_file(path).ok();
    }
}
