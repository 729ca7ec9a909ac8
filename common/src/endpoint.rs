//! バックエンドのエンドポイントURL組み立て

use url::{form_urlencoded, Url};

use crate::query::Query;
use crate::Result;

/// `/search` と `/analyze` のURLを作る
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// `base_url` 配下にAPIがあるものとして扱う（末尾スラッシュは補う）
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `GET <base>/search?query=<encoded>`
    ///
    /// 空白は `+` ではなく `%20` にする（`+` 自体は `%2B` になる）。
    pub fn search_url(&self, query: &Query) -> Result<Url> {
        let mut url = self.base.join("search")?;
        let encoded = form_urlencoded::byte_serialize(query.as_str().as_bytes())
            .collect::<String>()
            .replace('+', "%20");
        url.set_query(Some(&format!("query={}", encoded)));
        Ok(url)
    }

    /// `POST <base>/analyze`
    pub fn analyze_url(&self) -> Result<Url> {
        Ok(self.base.join("analyze")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://localhost:8000").expect("有効なURL")
    }

    #[test]
    fn test_search_url_path() {
        let query = Query::parse("拉麵").unwrap();
        let url = endpoints().search_url(&query).unwrap();
        assert_eq!(url.path(), "/search");
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(8000));
    }

    #[test]
    fn test_search_url_encodes_reserved_characters() {
        let query = Query::parse("Joe's Diner & Bar #2").unwrap();
        let url = endpoints().search_url(&query).unwrap();

        let raw = url.query().expect("クエリあり");
        assert!(raw.starts_with("query="));
        assert!(raw.contains("%26"));
        assert!(raw.contains("%23"));
        assert!(url.fragment().is_none());

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("query".to_string(), "Joe's Diner & Bar #2".to_string())]);
    }

    #[test]
    fn test_search_url_percent_encodes_space() {
        let query = Query::parse("Joe Diner").unwrap();
        let url = endpoints().search_url(&query).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/search?query=Joe%20Diner");

        let query = Query::parse("C++ 餐酒館").unwrap();
        let url = endpoints().search_url(&query).unwrap();
        assert!(url.query().unwrap_or_default().starts_with("query=C%2B%2B%20"));
        let (_, value) = url.query_pairs().next().expect("queryパラメータ");
        assert_eq!(value, "C++ 餐酒館");
    }

    #[test]
    fn test_search_url_encodes_unicode() {
        let query = Query::parse("鼎泰豐").unwrap();
        let url = endpoints().search_url(&query).unwrap();
        assert!(url.as_str().is_ascii());
        let (_, value) = url.query_pairs().next().expect("queryパラメータ");
        assert_eq!(value, "鼎泰豐");
    }

    #[test]
    fn test_analyze_url() {
        let url = endpoints().analyze_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/analyze");
    }

    #[test]
    fn test_base_with_sub_path() {
        let endpoints = Endpoints::new("https://example.com/minesweeper?x=1#top").unwrap();
        assert_eq!(endpoints.base().as_str(), "https://example.com/minesweeper/");
        assert_eq!(
            endpoints.analyze_url().unwrap().as_str(),
            "https://example.com/minesweeper/analyze"
        );
    }

    #[test]
    fn test_invalid_base_rejected() {
        assert!(Endpoints::new("not a url").is_err());
        assert!(Endpoints::new("mailto:someone@example.com").is_err());
    }
}
