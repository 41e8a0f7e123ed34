//! Debounced search-and-paginate state shared by the entity pages.
//!
//! A page calls [`use_paged_list`] once and gets a [`PagedList`] handle:
//!
//! - [`PagedList::set_filter`] stores the search text and (re)starts the
//!   debounce timer. When it fires, page 1 is reloaded if the text is empty
//!   or long enough to search.
//! - [`PagedList::set_page`] reloads another page immediately.
//! - [`PagedList::reload`] re-fetches the current page after a mutation.
//!
//! Every fetch takes a ticket from [`RequestSeq`]. A response whose ticket
//! is no longer the latest is dropped, so a slow search can never overwrite
//! the results of a newer one.

use std::time::Duration;

use api::{ApiClient, ApiError, PageInfo, PaginationResult};
use dioxus::core::Task;
use dioxus::prelude::*;

use crate::context::{use_api, use_config};

/// A collection that can be listed and searched page by page.
pub trait PagedResource: Clone + PartialEq + 'static {
    /// Collection name used in log lines.
    const NAME: &'static str;

    async fn list(
        client: &ApiClient,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<Self>, ApiError>;

    async fn search(
        client: &ApiClient,
        term: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<Self>, ApiError>;
}

/// Monotonic request counter; only the latest ticket may publish.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// The search term to send, or `None` to list everything.
pub fn search_term(filter: &str, min_chars: usize) -> Option<&str> {
    (!filter.is_empty() && filter.chars().count() >= min_chars).then_some(filter)
}

/// Whether a debounced filter change should trigger a reload. Filters that
/// are too short to search leave the current results alone.
pub fn reloads_on_filter(filter: &str, min_chars: usize) -> bool {
    filter.is_empty() || filter.chars().count() >= min_chars
}

/// Handle returned by [`use_paged_list`]. Copy it freely into closures.
pub struct PagedList<R: 'static> {
    items: Signal<Vec<R>>,
    page: Signal<PageInfo>,
    filter: Signal<String>,
    seq: Signal<RequestSeq>,
    pending: Signal<Option<Task>>,
    client: Signal<ApiClient>,
    page_size: u32,
    min_chars: usize,
    debounce: Duration,
}

impl<R: 'static> Clone for PagedList<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for PagedList<R> {}

/// Create the list state for `R` and load the first page on mount.
pub fn use_paged_list<R: PagedResource>() -> PagedList<R> {
    let client = use_api();
    let config = use_config();

    let list = use_hook(move || {
        let config = config.peek();
        PagedList {
            items: Signal::new(Vec::new()),
            page: Signal::new(PageInfo::default()),
            filter: Signal::new(String::new()),
            seq: Signal::new(RequestSeq::default()),
            pending: Signal::new(None),
            client,
            page_size: config.pagination.page_size,
            min_chars: config.search.min_chars,
            debounce: Duration::from_millis(u64::from(config.search.debounce_ms)),
        }
    });

    use_effect(move || list.set_page(1));

    list
}

impl<R: PagedResource> PagedList<R> {
    /// Rows of the current page.
    pub fn items(&self) -> Vec<R> {
        self.items.read().clone()
    }

    pub fn page(&self) -> PageInfo {
        *self.page.read()
    }

    /// The search text as typed.
    pub fn filter(&self) -> String {
        self.filter.read().clone()
    }

    /// Store the search text and restart the debounce timer.
    pub fn set_filter(mut self, text: String) {
        self.filter.set(text.clone());
        if let Some(task) = self.pending.write().take() {
            task.cancel();
        }

        let task = spawn(async move {
            sleep(self.debounce).await;
            if reloads_on_filter(&text, self.min_chars) {
                self.fetch(1).await;
            }
        });
        self.pending.set(Some(task));
    }

    /// Load `page_number` with the current filter.
    pub fn set_page(self, page_number: u32) {
        spawn(self.fetch(page_number.max(1)));
    }

    /// Re-fetch the current page, e.g. after a create or delete.
    pub async fn reload(self) {
        let current = self.page.peek().page_number;
        self.fetch(current.max(1)).await;
    }

    async fn fetch(mut self, page_number: u32) {
        let filter = self.filter.peek().clone();
        let ticket = self.seq.write().issue();
        let client = self.client.peek().clone();

        let result = match search_term(&filter, self.min_chars) {
            Some(term) => R::search(&client, term, page_number, self.page_size).await,
            None => R::list(&client, page_number, self.page_size).await,
        };

        if !self.seq.peek().is_current(ticket) {
            tracing::debug!("dropping stale {} page {page_number}", R::NAME);
            return;
        }

        match result {
            Ok(page) => {
                self.page.set(page.info());
                self.items.set(page.items);
            }
            Err(e) => tracing::error!("failed to load {}: {e}", R::NAME),
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut seq = RequestSeq::default();
        let first = seq.issue();
        let second = seq.issue();

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(seq.issue() > second);
    }

    #[test]
    fn test_search_term_needs_minimum_length() {
        assert_eq!(search_term("", 3), None);
        assert_eq!(search_term("be", 3), None);
        assert_eq!(search_term("beb", 3), Some("beb"));
        // Counted in characters, not bytes.
        assert_eq!(search_term("çã", 3), None);
        assert_eq!(search_term("", 0), None);
    }

    #[test]
    fn test_filter_change_reload_rule() {
        assert!(reloads_on_filter("", 3));
        assert!(!reloads_on_filter("a", 3));
        assert!(!reloads_on_filter("ab", 3));
        assert!(reloads_on_filter("abc", 3));
        assert!(reloads_on_filter("123456", 3));
    }

    mod debounce {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Mutex;
        use std::time::Duration;

        use api::{ApiClient, ApiError, HomeControlConfig, PaginationResult};
        use dioxus::core::NoOpMutations;
        use dioxus::prelude::*;

        use crate::context::ApiProvider;
        use crate::paged_list::{sleep, use_paged_list, PagedResource};

        static LISTS: AtomicUsize = AtomicUsize::new(0);
        static SEARCHES: AtomicUsize = AtomicUsize::new(0);
        static SNAPSHOTS: Mutex<Vec<(usize, usize)>> = Mutex::new(Vec::new());

        #[derive(Clone, Debug, PartialEq)]
        struct Registro;

        fn empty_page() -> PaginationResult<Registro> {
            PaginationResult {
                items: Vec::new(),
                page_number: 1,
                page_size: 5,
                total_pages: 0,
                total_records: 0,
            }
        }

        impl PagedResource for Registro {
            const NAME: &'static str = "registros";

            async fn list(
                _client: &ApiClient,
                _page_number: u32,
                _page_size: u32,
            ) -> Result<PaginationResult<Self>, ApiError> {
                LISTS.fetch_add(1, Ordering::SeqCst);
                Ok(empty_page())
            }

            async fn search(
                _client: &ApiClient,
                _term: &str,
                _page_number: u32,
                _page_size: u32,
            ) -> Result<PaginationResult<Self>, ApiError> {
                SEARCHES.fetch_add(1, Ordering::SeqCst);
                Ok(empty_page())
            }
        }

        fn snapshot() {
            let counts = (LISTS.load(Ordering::SeqCst), SEARCHES.load(Ordering::SeqCst));
            SNAPSHOTS.lock().unwrap().push(counts);
        }

        #[component]
        fn Typing() -> Element {
            let list = use_paged_list::<Registro>();
            use_hook(move || {
                spawn(async move {
                    let pause = Duration::from_millis(5);
                    let settle = Duration::from_millis(100);

                    sleep(settle).await;
                    snapshot();

                    for text in ["b", "be", "beb"] {
                        list.set_filter(text.to_string());
                        sleep(pause).await;
                    }
                    sleep(settle).await;
                    snapshot();

                    list.set_filter("xy".to_string());
                    sleep(settle).await;
                    snapshot();

                    list.set_filter(String::new());
                    sleep(settle).await;
                    snapshot();
                })
            });
            rsx! {}
        }

        fn app() -> Element {
            let mut config = HomeControlConfig::default();
            config.search.debounce_ms = 30;
            rsx! {
                ApiProvider { config, Typing {} }
            }
        }

        #[tokio::test]
        async fn test_typing_burst_triggers_one_search() {
            let mut dom = VirtualDom::new(app);
            dom.rebuild_in_place();

            let _ = tokio::time::timeout(Duration::from_secs(2), async {
                while SNAPSHOTS.lock().unwrap().len() < 4 {
                    dom.wait_for_work().await;
                    dom.render_immediate(&mut NoOpMutations);
                }
            })
            .await;

            // (list calls, search calls) after: mount, "b"/"be"/"beb", "xy", "".
            assert_eq!(
                *SNAPSHOTS.lock().unwrap(),
                vec![(1, 0), (1, 1), (1, 1), (2, 1)]
            );
        }
    }
}
