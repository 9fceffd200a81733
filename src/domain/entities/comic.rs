//! # Comic Entity
//!
//! コミックのメタデータと、一時画像ファイル名の導出

use url::Url;

/// コミックのメタデータ
///
/// Comic Selector が生成し、Image Fetcher と Publisher が消費する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicMetadata {
    /// 画像のURL
    pub image_url: Url,
    /// 投稿本文として使うキャプション（alt テキスト）
    pub caption: String,
    /// コミックのタイトル
    pub title: String,
}

impl ComicMetadata {
    /// 新しいメタデータを作成
    pub fn new(image_url: Url, caption: String, title: String) -> Self {
        Self {
            image_url,
            caption,
            title,
        }
    }

    /// 画像URLのパスから拡張子を取り出す
    ///
    /// # 例
    ///
    /// ```
    /// use comic_poster::domain::entities::comic::ComicMetadata;
    /// use url::Url;
    ///
    /// let comic = ComicMetadata::new(
    ///     Url::parse("https://imgs.xkcd.com/comics/foo/bar.png").unwrap(),
    ///     "caption".to_string(),
    ///     "Bar".to_string(),
    /// );
    /// assert_eq!(comic.image_extension(), ".png");
    /// ```
    pub fn image_extension(&self) -> &str {
        extension_of(self.image_url.path())
    }

    /// 一時画像ファイルの名前（`<title><ext>`）
    ///
    /// タイトル内のパス区切り文字は `_` に置換する
    pub fn image_file_name(&self) -> String {
        let title: String = self
            .title
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        format!("{}{}", title, self.image_extension())
    }
}

/// パスの最後のセグメントから、最後のドット以降を返す（ドットを含む）
///
/// 先頭のドットは拡張子として扱わない（`.hidden` は拡張子なし）
fn extension_of(path: &str) -> &str {
    let base = path.rsplit('/').next().unwrap_or("");
    let stem_start = base.len() - base.trim_start_matches('.').len();

    match base[stem_start..].rfind('.') {
        Some(idx) => &base[stem_start + idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comic(url: &str, title: &str) -> ComicMetadata {
        ComicMetadata::new(
            Url::parse(url).unwrap(),
            "alt text".to_string(),
            title.to_string(),
        )
    }

    #[test]
    fn test_image_extension_png() {
        let c = comic("https://imgs.xkcd.com/foo/bar.png", "Bar");
        assert_eq!(c.image_extension(), ".png");
    }

    #[test]
    fn test_image_extension_none() {
        let c = comic("https://imgs.xkcd.com/foo/bar", "Bar");
        assert_eq!(c.image_extension(), "");
    }

    #[test]
    fn test_image_extension_ignores_query() {
        let c = comic("https://imgs.xkcd.com/comics/a.jpg?size=2x", "A");
        assert_eq!(c.image_extension(), ".jpg");
    }

    #[test]
    fn test_image_extension_last_suffix_only() {
        let c = comic("https://example.com/archive.tar.gz", "A");
        assert_eq!(c.image_extension(), ".gz");
    }

    #[test]
    fn test_image_extension_dot_in_directory() {
        let c = comic("https://example.com/v1.2/image", "A");
        assert_eq!(c.image_extension(), "");
    }

    #[test]
    fn test_image_extension_hidden_file() {
        assert_eq!(extension_of("/dir/.hidden"), "");
        assert_eq!(extension_of("/dir/.hidden.png"), ".png");
    }

    #[test]
    fn test_image_file_name() {
        let c = comic("https://imgs.xkcd.com/comics/barrel.png", "Barrel - Part 1");
        assert_eq!(c.image_file_name(), "Barrel - Part 1.png");
    }

    #[test]
    fn test_image_file_name_replaces_separators() {
        let c = comic("https://imgs.xkcd.com/comics/a.gif", "1/2 \\ 3");
        assert_eq!(c.image_file_name(), "1_2 _ 3.gif");
    }
}
