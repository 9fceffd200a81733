//! # Temporary Image
//!
//! ダウンロードした画像を保持する一時ファイル
//!
//! 値がスコープを抜けると（成功・失敗どちらの経路でも）ファイルは削除される。
//! 削除は一度だけ行われる。

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use tempfile::NamedTempFile;

/// スコープ付きの一時画像ファイル
#[derive(Debug)]
pub struct TempImage {
    path: PathBuf,
    armed: bool,
}

impl TempImage {
    /// `dir/file_name` に画像を書き込む
    ///
    /// 同じディレクトリ内の一時ファイルに書き込んでから最終的な名前に置き換えるため、
    /// 書き込みに失敗した場合に途中までのファイルは残らない。
    ///
    /// # Errors
    ///
    /// 一時ファイルの作成・書き込み・リネームに失敗した場合
    pub fn create(dir: &Path, file_name: &str, bytes: &[u8]) -> io::Result<Self> {
        let path = dir.join(file_name);

        let mut staging = NamedTempFile::new_in(dir)?;
        staging.write_all(bytes)?;
        staging.as_file().sync_all()?;
        staging.persist(&path).map_err(|e| e.error)?;

        debug!("Wrote {} bytes to {}", bytes.len(), path.display());

        Ok(Self { path, armed: true })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイル名部分（マルチパートのファイル名に使う）
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// ファイルの内容を読み込む
    pub fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    /// 明示的に削除し、エラーを呼び出し元に返す
    pub fn remove(mut self) -> io::Result<()> {
        self.armed = false;
        fs::remove_file(&self.path)
    }
}

impl Drop for TempImage {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;

        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed temporary image {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Failed to remove temporary image {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}
