use anyhow::anyhow;
use std::{error::Error, fmt::Display, path::Path};

use crate::AnyResult;

/// Attaches a human readable description to a failed operation.
pub trait AnyhowResultExt<T> {
    fn otherwise(self, s: impl Display) -> AnyResult<T>;

    /// Same as [`AnyhowResultExt::otherwise`], but phrased around a file system path.
    ///
    /// ## Example
    /// ```
    /// # use std::path::Path;
    /// # use texembed_utils::AnyhowResultExt;
    /// let result: Result<(), std::io::Error> = Err(std::io::ErrorKind::NotFound.into());
    /// let error = result.otherwise_at("reading", Path::new("a.png")).unwrap_err();
    /// assert_eq!(error.to_string(), "reading `a.png` failed");
    /// ```
    fn otherwise_at(self, action: &str, path: &Path) -> AnyResult<T>
    where
        Self: Sized,
    {
        self.otherwise(format!("{action} `{}` failed", path.display()))
    }
}

impl<T, E: Error + Send + Sync + 'static> AnyhowResultExt<T> for Result<T, E> {
    fn otherwise(self, s: impl Display) -> AnyResult<T> {
        self.map_err(|e| anyhow::Error::from(e).context(s.to_string()))
    }
}

impl<T> AnyhowResultExt<T> for Option<T> {
    fn otherwise(self, s: impl Display) -> AnyResult<T> {
        self.ok_or_else(|| anyhow!("{s}"))
    }
}
