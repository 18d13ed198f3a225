//! ワークスペース内のカタログファイルを検索して読み込む
use std::path::{
    Path,
    PathBuf,
};

use futures::stream::{
    self,
    StreamExt,
};
use ignore::WalkBuilder;

use crate::config::{
    CatalogSettings,
    FileMatcher,
};
use crate::indexer::types::IndexerError;
use crate::input::language::detect_language_from_path;
use crate::input::{
    ParseError,
    parse_catalog,
};
use crate::ir::{
    Catalog,
    CatalogSet,
};

/// カタログファイルの検索と並列読み込み
#[derive(Clone, Copy, Debug, Default)]
pub struct WorkspaceIndexer;

impl WorkspaceIndexer {
    /// 新しいインデクサーを作成
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// ワークスペースの全カタログを読み込む
    ///
    /// 読み込めないファイルは警告を出してスキップする。
    ///
    /// # Errors
    /// - ルートがディレクトリでない
    /// - glob パターンが不正
    pub async fn load_workspace(
        &self,
        workspace_path: &Path,
        settings: &CatalogSettings,
    ) -> Result<CatalogSet, IndexerError> {
        tracing::debug!(workspace_path = %workspace_path.display(), "Indexing workspace");
        if !workspace_path.is_dir() {
            return Err(IndexerError::InvalidPath(workspace_path.to_path_buf()));
        }

        let matcher = FileMatcher::new(workspace_path.to_path_buf(), settings)?;
        let files = Self::find_catalog_files(workspace_path, &matcher);
        Ok(self.load_files(files, settings).await)
    }

    /// 指定されたファイルを並列に読み込む
    ///
    /// 同時実行数は `loading.numThreads` で制限される。結果はパス順に登録されるため、
    /// 同じロケールのファイルが複数ある場合も結果は決定的になる。
    pub async fn load_files(&self, files: Vec<PathBuf>, settings: &CatalogSettings) -> CatalogSet {
        let concurrency = settings.loading.effective_threads();
        tracing::debug!(files = files.len(), concurrency, "Loading catalogs");

        let mut loaded: Vec<(PathBuf, Result<Catalog, ParseError>)> = stream::iter(files)
            .map(|path| async move {
                let result = Self::load_file(&path).await;
                (path, result)
            })
            .buffer_unordered(concurrency)
            .collect()
            .await;
        loaded.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut set = CatalogSet::new();
        let mut failed = 0_usize;
        for (path, result) in loaded {
            match result {
                Ok(catalog) => {
                    let locale = catalog.language.clone().unwrap_or_else(|| {
                        tracing::debug!(
                            path = %path.display(),
                            "No locale in catalog or file name; using the source language"
                        );
                        settings.source_language.clone()
                    });
                    set.insert(&locale, catalog, Some(&path));
                }
                Err(e) => {
                    // 読み込みエラーは警告として扱い、処理を続行
                    tracing::warn!("Failed to load catalog {:?}: {}", path, e);
                    failed += 1;
                }
            }
        }

        tracing::info!(locales = set.len(), failed, "Catalogs loaded");
        set
    }

    /// 単一ファイルを読み込む
    async fn load_file(path: &Path) -> Result<Catalog, ParseError> {
        let content = tokio::fs::read_to_string(path).await?;
        let mut catalog = parse_catalog(&content)?;
        if catalog.language.is_none() {
            catalog.language = detect_language_from_path(path);
        }
        Ok(catalog)
    }

    /// カタログファイルを検索
    ///
    /// `.gitignore` を尊重し、隠しファイルも対象にする。結果はパス順。
    #[must_use]
    pub fn find_catalog_files(workspace_path: &Path, matcher: &FileMatcher) -> Vec<PathBuf> {
        let mut found_files = Vec::new();

        // ignore クレートでファイルを走査
        for result in WalkBuilder::new(workspace_path)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false)
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            // ファイルのみを対象
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();

            // workspace からの相対パスを取得
            let Ok(relative_path) = path.strip_prefix(workspace_path) else {
                continue;
            };
            if !matcher.is_catalog_file_relative(relative_path) {
                continue;
            }

            found_files.push(path.to_path_buf());
        }

        found_files.sort();
        found_files
    }
}
