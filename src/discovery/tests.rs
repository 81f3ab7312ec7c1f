//! Discovery layer tests

#[cfg(test)]
mod matcher_tests {
    use crate::discovery::matcher::{category_keywords, matches_category, matches_language};

    #[test]
    fn test_all_code_always_matches() {
        assert!(matches_language("all", "English"));
        assert!(matches_language("all", ""));
        assert!(matches_language("", "anything"));
    }

    #[test]
    fn test_empty_text_never_matches_concrete_code() {
        assert!(!matches_language("hi", ""));
        assert!(!matches_language("ko", ""));
    }

    #[test]
    fn test_language_variants() {
        assert!(matches_language("zh", "Mandarin"));
        assert!(matches_language("zh", "Cantonese, English"));
        assert!(matches_language("hi", "Hindi, English"));
        assert!(matches_language("es", "Espanol"));
        assert!(!matches_language("hi", "English, Tamil"));
    }

    #[test]
    fn test_unknown_code_falls_back_to_itself() {
        assert!(matches_language("tamil", "Tamil, Telugu"));
        assert!(!matches_language("tamil", "Hindi"));
    }

    #[test]
    fn test_category_variants() {
        assert!(matches_category("sci-fi", "Sci-Fi, Thriller"));
        assert!(matches_category("sci-fi", "Science Fiction"));
        assert!(matches_category("thriller", "Suspense"));
        assert!(!matches_category("horror", "Comedy, Romance"));
    }

    #[test]
    fn test_substring_containment_is_deliberately_loose() {
        // "Dramatic Comedy" contains "drama"; accepted noise by design.
        assert!(matches_category("drama", "Dramatic Comedy"));
    }

    #[test]
    fn test_category_all_passthrough() {
        assert!(matches_category("all", ""));
        assert!(matches_category("all", "Western"));
    }

    #[test]
    fn test_category_keywords_lookup() {
        assert_eq!(
            category_keywords("sci-fi"),
            vec!["sci-fi", "science fiction", "sci fi"]
        );
        assert_eq!(category_keywords("noir"), vec!["noir"]);
        assert!(category_keywords("all").is_empty());
    }
}

#[cfg(test)]
mod normalize_tests {
    use crate::discovery::normalize::{
        canonical_id, ensure_external_id, external_id, normalize_image_url,
    };

    #[test]
    fn test_canonical_id_strips_prefix() {
        assert_eq!(canonical_id("tt0944947"), 944947);
        assert_eq!(canonical_id("tt13443470"), 13_443_470);
        assert_eq!(canonical_id("944947"), 944947);
    }

    #[test]
    fn test_canonical_id_unresolved_is_zero() {
        assert_eq!(canonical_id("tt0000000"), 0);
        assert_eq!(canonical_id("ttabcdef"), 0);
        assert_eq!(canonical_id(""), 0);
    }

    #[test]
    fn test_external_id_zero_pads() {
        assert_eq!(external_id(944947), "tt0944947");
        assert_eq!(external_id(42), "tt0000042");
        assert_eq!(external_id(13_443_470), "tt13443470");
    }

    #[test]
    fn test_ensure_external_id_passthrough() {
        assert_eq!(ensure_external_id("tt0944947"), "tt0944947");
        assert_eq!(ensure_external_id("944947"), "tt0944947");
    }

    #[test]
    fn test_sentinels_yield_none() {
        assert_eq!(normalize_image_url("N/A"), None);
        assert_eq!(normalize_image_url(""), None);
        assert_eq!(normalize_image_url("   "), None);
    }

    #[test]
    fn test_schemeless_gets_https() {
        assert_eq!(
            normalize_image_url("example.com/a.jpg"),
            Some("https://example.com/a.jpg".to_string())
        );
    }

    #[test]
    fn test_http_is_upgraded() {
        assert_eq!(
            normalize_image_url("http://example.com/a.jpg"),
            Some("https://example.com/a.jpg".to_string())
        );
    }

    #[test]
    fn test_scheme_relative_gets_https() {
        assert_eq!(
            normalize_image_url("//example.com/a.jpg"),
            Some("https://example.com/a.jpg".to_string())
        );
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let first = normalize_image_url("http://example.com/a.jpg").unwrap();
        assert_eq!(normalize_image_url(&first), Some(first.clone()));
    }

    #[test]
    fn test_unparseable_url_yields_none() {
        assert_eq!(normalize_image_url("https://exa mple.com/a.jpg"), None);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(
            normalize_image_url("  http://example.com/a.jpg  "),
            Some("https://example.com/a.jpg".to_string())
        );
    }
}

#[cfg(test)]
mod table_tests {
    use crate::discovery::tables::{CATEGORY_TO_GENRE_IDS, GENRE_NAMES, seed_titles};
    use crate::discovery::types::ListKind;

    #[test]
    fn test_exact_seed_entry() {
        let titles = seed_titles(ListKind::Popular, "hi");
        assert!(titles.contains(&"3 Idiots"));
    }

    #[test]
    fn test_missing_language_falls_back_to_all() {
        let fallback = seed_titles(ListKind::Popular, "sv");
        assert_eq!(fallback, seed_titles(ListKind::Popular, "all"));
    }

    #[test]
    fn test_missing_list_falls_back_to_popular_all() {
        // now_playing has no seed table of its own.
        let fallback = seed_titles(ListKind::NowPlaying, "all");
        assert_eq!(fallback, seed_titles(ListKind::Popular, "all"));
    }

    #[test]
    fn test_empty_language_treated_as_all() {
        assert_eq!(
            seed_titles(ListKind::Trending, ""),
            seed_titles(ListKind::Trending, "all")
        );
    }

    #[test]
    fn test_category_ids_resolve_to_names() {
        for ids in CATEGORY_TO_GENRE_IDS.values() {
            for id in *ids {
                assert!(GENRE_NAMES.contains_key(id), "unmapped genre id {id}");
            }
        }
    }
}

#[cfg(test)]
mod type_tests {
    use crate::discovery::types::{DiscoverRequest, ListKind, MediaKind, MediaSummary, MediaType};

    #[test]
    fn test_list_kind_parse_roundtrip() {
        for kind in [
            ListKind::Trending,
            ListKind::Popular,
            ListKind::TopRated,
            ListKind::Upcoming,
            ListKind::NowPlaying,
        ] {
            assert_eq!(ListKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ListKind::parse("bogus"), None);
    }

    #[test]
    fn test_media_kind_parse() {
        assert_eq!(MediaKind::parse("movie"), MediaKind::Movie);
        assert_eq!(MediaKind::parse("tv"), MediaKind::Series);
        assert_eq!(MediaKind::parse("all"), MediaKind::Both);
        assert_eq!(MediaKind::parse("anything"), MediaKind::Both);
    }

    #[test]
    fn test_media_kind_concrete_is_series_first() {
        assert_eq!(
            MediaKind::Both.concrete(),
            &[MediaType::Series, MediaType::Movie]
        );
        assert_eq!(MediaKind::Movie.concrete(), &[MediaType::Movie]);
    }

    #[test]
    fn test_default_request_is_unfiltered() {
        let request = DiscoverRequest::default();
        assert_eq!(request.language, "all");
        assert_eq!(request.category, "all");
        assert!(request.genre_ids.is_empty());
        assert_eq!(request.page, 1);
    }

    #[test]
    fn test_summary_serialization_omits_absent_optionals() {
        let summary = MediaSummary {
            id: 603,
            external_id: None,
            media_type: MediaType::Movie,
            title: "The Matrix".to_string(),
            overview: String::new(),
            poster_url: None,
            backdrop_url: None,
            rating: 8.7,
            vote_count: 20_000,
            release_date: Some("1999-03-31".to_string()),
            year: None,
            language: "English".to_string(),
            genres: vec!["Sci-Fi".to_string()],
            popularity: 8.7,
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["media_type"], "movie");
        assert!(value.get("external_id").is_none());
        assert!(value.get("year").is_none());
        assert_eq!(value["release_date"], "1999-03-31");
    }
}

#[cfg(test)]
mod endpoint_tests {
    use chrono::{Duration, Utc};

    use crate::discovery::{DiscoverRequest, ListKind, MediaType, TmdbProvider};

    fn param<'a>(params: &'a [(&str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_unfiltered_lists_use_canned_endpoints() {
        let request = DiscoverRequest::default();

        let (endpoint, params) =
            TmdbProvider::list_endpoint(ListKind::TopRated, MediaType::Movie, &request);
        assert_eq!(endpoint, "/movie/top_rated");
        assert!(param(&params, "sort_by").is_none());

        let (endpoint, _) =
            TmdbProvider::list_endpoint(ListKind::Trending, MediaType::Series, &request);
        assert_eq!(endpoint, "/trending/tv/week");

        let (endpoint, _) =
            TmdbProvider::list_endpoint(ListKind::Popular, MediaType::Movie, &request);
        assert_eq!(endpoint, "/movie/popular");

        let (endpoint, _) =
            TmdbProvider::list_endpoint(ListKind::Upcoming, MediaType::Series, &request);
        assert_eq!(endpoint, "/tv/on_the_air");

        let (endpoint, _) =
            TmdbProvider::list_endpoint(ListKind::NowPlaying, MediaType::Movie, &request);
        assert_eq!(endpoint, "/movie/now_playing");
    }

    #[test]
    fn test_language_filter_switches_to_discover() {
        let request = DiscoverRequest {
            language: "ko".to_string(),
            ..Default::default()
        };
        let (endpoint, params) =
            TmdbProvider::list_endpoint(ListKind::TopRated, MediaType::Movie, &request);

        assert_eq!(endpoint, "/discover/movie");
        assert_eq!(param(&params, "with_original_language"), Some("ko"));
        assert_eq!(param(&params, "sort_by"), Some("vote_average.desc"));
        assert_eq!(param(&params, "vote_count.gte"), Some("200"));
    }

    #[test]
    fn test_category_translates_to_piped_genre_ids() {
        let request = DiscoverRequest {
            category: "sci-fi".to_string(),
            ..Default::default()
        };
        let (endpoint, params) =
            TmdbProvider::list_endpoint(ListKind::Popular, MediaType::Series, &request);

        assert_eq!(endpoint, "/discover/tv");
        assert_eq!(param(&params, "with_genres"), Some("878|10765"));
        assert_eq!(param(&params, "sort_by"), Some("popularity.desc"));
    }

    #[test]
    fn test_explicit_genre_ids_override_category() {
        let request = DiscoverRequest {
            category: "comedy".to_string(),
            genre_ids: vec![27, 53],
            ..Default::default()
        };
        let (_, params) =
            TmdbProvider::list_endpoint(ListKind::Popular, MediaType::Movie, &request);

        assert_eq!(param(&params, "with_genres"), Some("27|53"));
    }

    #[test]
    fn test_unknown_category_stays_on_canned_endpoint() {
        // No genre translation, no language filter: nothing to discover on.
        let request = DiscoverRequest {
            category: "noir".to_string(),
            ..Default::default()
        };
        let (endpoint, _) =
            TmdbProvider::list_endpoint(ListKind::TopRated, MediaType::Movie, &request);

        assert_eq!(endpoint, "/movie/top_rated");
    }

    #[test]
    fn test_upcoming_window_starts_today() {
        let request = DiscoverRequest {
            language: "hi".to_string(),
            ..Default::default()
        };
        let (endpoint, params) =
            TmdbProvider::list_endpoint(ListKind::Upcoming, MediaType::Movie, &request);
        let today = Utc::now().date_naive().to_string();

        assert_eq!(endpoint, "/discover/movie");
        assert_eq!(param(&params, "primary_release_date.gte"), Some(today.as_str()));
        assert_eq!(param(&params, "sort_by"), Some("popularity.desc"));
    }

    #[test]
    fn test_now_playing_window_covers_last_thirty_days() {
        let request = DiscoverRequest {
            language: "hi".to_string(),
            ..Default::default()
        };
        let (endpoint, params) =
            TmdbProvider::list_endpoint(ListKind::NowPlaying, MediaType::Series, &request);
        let today = Utc::now().date_naive();
        let month_ago = (today - Duration::days(30)).to_string();
        let today = today.to_string();

        assert_eq!(endpoint, "/discover/tv");
        assert_eq!(param(&params, "first_air_date.gte"), Some(month_ago.as_str()));
        assert_eq!(param(&params, "first_air_date.lte"), Some(today.as_str()));
    }
}

#[cfg(test)]
mod category_path_tests {
    use crate::discovery::{MediaSummary, MediaType, OmdbProvider};

    fn summary(id: i64, rating: f64) -> MediaSummary {
        MediaSummary {
            id,
            external_id: None,
            media_type: MediaType::Movie,
            title: format!("Title {id}"),
            overview: String::new(),
            poster_url: None,
            backdrop_url: None,
            rating,
            vote_count: 100,
            release_date: None,
            year: None,
            language: "English".to_string(),
            genres: vec!["Horror".to_string()],
            popularity: rating,
        }
    }

    #[test]
    fn test_category_hits_preempt_seed_listing() {
        let page =
            OmdbProvider::category_page(vec![summary(1, 6.0), summary(2, 9.0)]).unwrap();

        // A single unpaginated page; the seed list is never consulted.
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_results, 2);

        let ratings: Vec<f64> = page.results.iter().map(|s| s.rating).collect();
        assert_eq!(ratings, vec![9.0, 6.0]);
    }

    #[test]
    fn test_no_category_hits_fall_back_to_seed_listing() {
        assert!(OmdbProvider::category_page(Vec::new()).is_none());
    }
}

#[cfg(test)]
mod aggregate_tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::discovery::{
        DiscoverPage, DiscoverRequest, Discovery, ListKind, MediaSummary, MediaType, Result,
        SeasonDetail, TitleDetail,
        provider::DiscoveryProvider,
    };

    fn summary(id: i64, rating: f64) -> MediaSummary {
        MediaSummary {
            id,
            external_id: None,
            media_type: MediaType::Movie,
            title: format!("Title {id}"),
            overview: String::new(),
            poster_url: None,
            backdrop_url: None,
            rating,
            vote_count: 100,
            release_date: None,
            year: None,
            language: "English".to_string(),
            genres: vec!["Drama".to_string()],
            popularity: rating,
        }
    }

    /// Backend stub returning a fixed page, including unresolved records.
    struct StubProvider {
        results: Vec<MediaSummary>,
    }

    #[async_trait]
    impl DiscoveryProvider for StubProvider {
        fn id(&self) -> &'static str {
            "stub"
        }

        fn name(&self) -> &'static str {
            "Stub"
        }

        async fn discover(
            &self,
            _list: ListKind,
            request: &DiscoverRequest,
        ) -> Result<DiscoverPage> {
            let mut page = DiscoverPage {
                page: request.page,
                results: self.results.clone(),
                total_pages: 1,
                total_results: self.results.len() as u64,
            };
            page.sort_by_rating();
            Ok(page)
        }

        async fn search(&self, _query: &str, request: &DiscoverRequest) -> Result<DiscoverPage> {
            self.discover(ListKind::Popular, request).await
        }

        async fn title_detail(&self, _media_type: MediaType, id: &str) -> Result<TitleDetail> {
            Err(crate::discovery::DiscoveryError::NotFound(id.to_string()))
        }

        async fn season_detail(&self, series_id: &str, _season: u32) -> Result<SeasonDetail> {
            Err(crate::discovery::DiscoveryError::NotFound(
                series_id.to_string(),
            ))
        }
    }

    #[tokio::test]
    async fn test_unresolved_ids_are_filtered() {
        let discovery = Discovery::new(Arc::new(StubProvider {
            results: vec![summary(1, 7.0), summary(0, 9.9), summary(2, 8.0)],
        }));

        let page = discovery
            .discover(ListKind::Popular, &DiscoverRequest::default())
            .await
            .unwrap();

        assert_eq!(page.results.len(), 2);
        assert!(page.results.iter().all(|s| s.id != 0));
    }

    #[tokio::test]
    async fn test_results_sorted_non_increasing_by_rating() {
        let discovery = Discovery::new(Arc::new(StubProvider {
            results: vec![summary(1, 6.2), summary(2, 9.1), summary(3, 7.7)],
        }));

        let page = discovery
            .discover(ListKind::TopRated, &DiscoverRequest::default())
            .await
            .unwrap();

        let ratings: Vec<f64> = page.results.iter().map(|s| s.rating).collect();
        assert_eq!(ratings, vec![9.1, 7.7, 6.2]);
    }

    #[tokio::test]
    async fn test_suggestions_capped_at_eight() {
        let results: Vec<MediaSummary> = (1..=12).map(|id| summary(id, 5.0)).collect();
        let discovery = Discovery::new(Arc::new(StubProvider { results }));

        let suggestions = discovery.suggestions("breaking").await.unwrap();
        assert_eq!(suggestions.len(), 8);
    }

    #[tokio::test]
    async fn test_short_suggestion_query_is_empty() {
        let discovery = Discovery::new(Arc::new(StubProvider {
            results: vec![summary(1, 7.0)],
        }));

        assert!(discovery.suggestions("b").await.unwrap().is_empty());
    }
}

#[cfg(test)]
mod batch_tests {
    use std::time::Duration;

    use futures::future::join_all;

    /// Partial-failure semantics of a bounded fan-out: one slow lookup
    /// times out and is skipped, the rest of the batch survives.
    #[tokio::test]
    async fn test_one_timeout_does_not_abort_batch() {
        let deadline = Duration::from_millis(50);

        let lookups = (0u64..5).map(|i| async move {
            let work = async move {
                if i == 2 {
                    tokio::time::sleep(Duration::from_secs(10)).await;
                }
                i
            };
            tokio::time::timeout(deadline, work).await.ok()
        });

        let outcomes: Vec<u64> = join_all(lookups).await.into_iter().flatten().collect();
        assert_eq!(outcomes, vec![0, 1, 3, 4]);
    }
}
