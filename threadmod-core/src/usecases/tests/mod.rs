use super::{prelude::*, Context, Limits};
use crate::links::ThreadLinkParser;
use std::cell::{Cell, RefCell};

pub use threadmod_entities::builders::*;

type RepoResult<T> = std::result::Result<T, RepoError>;

pub const FORUM_URL: &str = "https://forum.example.com/";

#[derive(Default)]
pub struct MockDb {
    pub posts: RefCell<Vec<Post>>,
    pub threads: RefCell<Vec<Thread>>,
    pub categories: RefCell<Vec<Category>>,
}

impl MockDb {
    pub fn add_post(&self, post: Post) {
        self.posts.borrow_mut().push(post);
    }

    pub fn add_thread(&self, thread: Thread) {
        self.threads.borrow_mut().push(thread);
    }

    pub fn add_category(&self, category: Category) {
        self.categories.borrow_mut().push(category);
    }

    pub fn add_private_thread(&self, id: IdValue, category: IdValue) {
        self.add_category(Category {
            is_threads_tree: false,
            ..Category::new(category, "Private threads")
        });
        self.add_thread(
            Thread::build()
                .id(id)
                .category(category)
                .title("Private")
                .finish(),
        );
    }

    fn is_in_threads_tree(&self, thread: &Thread) -> bool {
        self.categories
            .borrow()
            .iter()
            .find(|c| c.id == thread.category)
            .map(|c| c.is_threads_tree)
            .unwrap_or(true)
    }
}

impl PostRepo for MockDb {
    fn get_posts_of_thread(&self, thread_id: ThreadId, ids: &[PostId]) -> RepoResult<Vec<Post>> {
        // Deliberately unordered
        Ok(self
            .posts
            .borrow()
            .iter()
            .rev()
            .filter(|p| p.thread == thread_id && ids.contains(&p.id))
            .cloned()
            .collect())
    }
}

impl ThreadRepo for MockDb {
    fn get_thread(&self, id: ThreadId) -> RepoResult<Thread> {
        self.threads
            .borrow()
            .iter()
            .find(|t| t.id == id && self.is_in_threads_tree(t))
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_threads(&self, ids: &[ThreadId]) -> RepoResult<Vec<Thread>> {
        Ok(self
            .threads
            .borrow()
            .iter()
            .filter(|t| ids.contains(&t.id) && self.is_in_threads_tree(t))
            .cloned()
            .collect())
    }
}

impl CategoryRepo for MockDb {
    fn get_category(&self, id: CategoryId) -> RepoResult<Category> {
        self.categories
            .borrow()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

/// Grants everything unless told otherwise.
///
/// Counts the evaluated `allow_*` predicates.
pub struct MockAcl {
    pub category_acl: CategoryAcl,
    pub broken_category_acl: bool,
    pub invisible_threads: Vec<ThreadId>,
    pub read_only_threads: Vec<ThreadId>,
    denials: Vec<(&'static str, IdValue, String)>,
    checks: Cell<usize>,
}

impl Default for MockAcl {
    fn default() -> Self {
        Self {
            category_acl: CategoryAcl {
                can_see: true,
                can_browse: true,
                can_start_threads: true,
                can_pin_threads: ThreadWeight::PinnedGlobally,
                can_hide_threads: true,
                can_close_threads: true,
                can_approve_content: true,
            },
            broken_category_acl: false,
            invisible_threads: vec![],
            read_only_threads: vec![],
            denials: vec![],
            checks: Cell::new(0),
        }
    }
}

impl MockAcl {
    pub fn deny(mut self, predicate: &'static str, id: IdValue, reason: &str) -> Self {
        self.denials.push((predicate, id, reason.to_owned()));
        self
    }

    pub fn checks(&self) -> usize {
        self.checks.get()
    }

    fn check(&self, predicate: &str, id: IdValue) -> std::result::Result<(), Denial> {
        self.checks.set(self.checks.get() + 1);
        match self
            .denials
            .iter()
            .find(|(p, i, _)| *p == predicate && *i == id)
        {
            Some((_, _, reason)) => Err(Denial::new(reason.as_str())),
            None => Ok(()),
        }
    }
}

impl Acl for MockAcl {
    fn category_acl(&self, _: &User, _: CategoryId) -> RepoResult<CategoryAcl> {
        if self.broken_category_acl {
            return Err(RepoError::Other(anyhow::anyhow!("ACL cache unavailable")));
        }
        Ok(self.category_acl.clone())
    }

    fn allow_delete_post(&self, _: &User, post: &Post) -> std::result::Result<(), Denial> {
        self.check("delete_post", post.id.value())
    }

    fn allow_delete_event(&self, _: &User, post: &Post) -> std::result::Result<(), Denial> {
        self.check("delete_event", post.id.value())
    }

    fn allow_delete_best_answer(&self, _: &User, post: &Post) -> std::result::Result<(), Denial> {
        self.check("delete_best_answer", post.id.value())
    }

    fn allow_merge_post(&self, _: &User, post: &Post) -> std::result::Result<(), Denial> {
        self.check("merge_post", post.id.value())
    }

    fn allow_move_post(&self, _: &User, post: &Post) -> std::result::Result<(), Denial> {
        self.check("move_post", post.id.value())
    }

    fn allow_split_post(&self, _: &User, post: &Post) -> std::result::Result<(), Denial> {
        self.check("split_post", post.id.value())
    }

    fn allow_delete_thread(&self, _: &User, thread: &Thread) -> std::result::Result<(), Denial> {
        self.check("delete_thread", thread.id.value())
    }

    fn allow_merge_thread(
        &self,
        _: &User,
        thread: &Thread,
        other_thread: bool,
    ) -> std::result::Result<(), Denial> {
        if other_thread {
            self.check("merge_into_thread", thread.id.value())
        } else {
            self.check("merge_thread", thread.id.value())
        }
    }

    fn can_see_thread(&self, _: &User, thread: &Thread) -> bool {
        !self.invisible_threads.contains(&thread.id)
    }

    fn can_reply_thread(&self, _: &User, thread: &Thread) -> bool {
        !self.read_only_threads.contains(&thread.id)
    }
}

pub struct Fixture {
    pub db: MockDb,
    pub acl: MockAcl,
    pub links: ThreadLinkParser,
    pub user: User,
    pub limits: Limits,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            db: MockDb::default(),
            acl: MockAcl::default(),
            links: ThreadLinkParser::new(FORUM_URL.parse().unwrap()),
            user: User::new(1, "moderator"),
            limits: Limits::default(),
        }
    }
}

impl Fixture {
    /// A fixture with thread 1 in category 1 containing the posts 1..=count.
    pub fn with_thread_posts(count: IdValue) -> Self {
        let fixture = Self::default();
        fixture.db.add_category(Category::new(1, "General"));
        fixture
            .db
            .add_thread(Thread::build().id(1).category(1).title("Thread").finish());
        for id in 1..=count {
            fixture.db.add_post(
                Post::build()
                    .id(id)
                    .thread(1)
                    .category(1)
                    .poster(2, "alice")
                    .first_post(id == 1)
                    .finish(),
            );
        }
        fixture
    }

    pub fn ctx(&self) -> Context<'_, MockDb> {
        Context {
            repo: &self.db,
            acl: &self.acl,
            links: &self.links,
            user: &self.user,
            limits: self.limits,
        }
    }

    pub fn thread(&self, id: IdValue) -> Thread {
        self.db.get_thread(ThreadId::new(id)).unwrap()
    }

    pub fn update_post(&self, id: IdValue, update: impl FnOnce(&mut Post)) {
        let mut posts = self.db.posts.borrow_mut();
        let post = posts.iter_mut().find(|p| p.id.value() == id).unwrap();
        update(post);
    }
}

pub fn thread_link(id: IdValue) -> Option<String> {
    Some(format!("{FORUM_URL}t/thread-{id}/{id}/"))
}

pub fn post_ids(ids: &[IdValue]) -> Option<Vec<PostId>> {
    Some(ids.iter().copied().map(PostId::new).collect())
}

pub fn thread_ids(ids: &[IdValue]) -> Option<Vec<ThreadId>> {
    Some(ids.iter().copied().map(ThreadId::new).collect())
}
