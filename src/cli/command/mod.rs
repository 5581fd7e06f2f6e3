pub mod convert;

use std::path::{Path, PathBuf};

pub use convert::convert;

/// The input path with its extension swapped for `.par`.
pub fn make_par_file_name(input: &Path) -> PathBuf {
    input.with_extension("par")
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn should_make_par_file_name() {
        assert_eq!(
            make_par_file_name(Path::new("data/sotonera.csv")),
            PathBuf::from("data/sotonera.par")
        );
        assert_eq!(make_par_file_name(Path::new("moscow")), PathBuf::from("moscow.par"));
    }
}
