pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{post_builder::*, thread_builder::*};

pub mod post_builder {

    use super::*;
    use crate::{id::*, post::*};

    #[derive(Debug)]
    pub struct PostBuild {
        post: Post,
    }

    impl PostBuild {
        pub fn id(mut self, id: IdValue) -> Self {
            self.post.id = id.into();
            self
        }
        pub fn thread(mut self, id: IdValue) -> Self {
            self.post.thread = id.into();
            self
        }
        pub fn category(mut self, id: IdValue) -> Self {
            self.post.category = id.into();
            self
        }
        pub fn poster(mut self, id: IdValue, name: &str) -> Self {
            self.post.poster_id = Some(id.into());
            self.post.poster_name = name.into();
            self
        }
        pub fn anonymous_poster(mut self, name: &str) -> Self {
            self.post.poster_id = None;
            self.post.poster_name = name.into();
            self
        }
        pub fn hidden(mut self, v: bool) -> Self {
            self.post.is_hidden = v;
            self
        }
        pub fn unapproved(mut self, v: bool) -> Self {
            self.post.is_unapproved = v;
            self
        }
        pub fn first_post(mut self, v: bool) -> Self {
            self.post.is_first_post = v;
            self
        }
        pub fn event(mut self, v: bool) -> Self {
            self.post.is_event = v;
            self
        }
        pub fn best_answer(mut self, v: bool) -> Self {
            self.post.is_best_answer = v;
            self
        }
        pub fn finish(self) -> Post {
            self.post
        }
    }

    impl Builder for Post {
        type Build = PostBuild;
        fn build() -> PostBuild {
            PostBuild {
                post: Post {
                    id: PostId::default(),
                    thread: ThreadId::default(),
                    category: CategoryId::default(),
                    poster_id: None,
                    poster_name: "".into(),
                    is_hidden: false,
                    is_unapproved: false,
                    is_first_post: false,
                    is_event: false,
                    is_best_answer: false,
                },
            }
        }
    }
}

pub mod thread_builder {

    use super::*;
    use crate::{id::*, thread::*};

    #[derive(Debug)]
    pub struct ThreadBuild {
        thread: Thread,
    }

    impl ThreadBuild {
        pub fn id(mut self, id: IdValue) -> Self {
            self.thread.id = id.into();
            self
        }
        pub fn category(mut self, id: IdValue) -> Self {
            self.thread.category = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.thread.title = title.into();
            self
        }
        pub fn weight(mut self, weight: ThreadWeight) -> Self {
            self.thread.weight = weight;
            self
        }
        pub fn hidden(mut self, v: bool) -> Self {
            self.thread.is_hidden = v;
            self
        }
        pub fn closed(mut self, v: bool) -> Self {
            self.thread.is_closed = v;
            self
        }
        pub fn best_answer(mut self, id: Option<IdValue>) -> Self {
            self.thread.best_answer = id.map(Into::into);
            self
        }
        pub fn poll(mut self, id: Option<IdValue>) -> Self {
            self.thread.poll = id.map(Into::into);
            self
        }
        pub fn finish(self) -> Thread {
            self.thread
        }
    }

    impl Builder for Thread {
        type Build = ThreadBuild;
        fn build() -> ThreadBuild {
            ThreadBuild {
                thread: Thread {
                    id: ThreadId::default(),
                    category: CategoryId::default(),
                    title: "".into(),
                    weight: ThreadWeight::Default,
                    is_hidden: false,
                    is_closed: false,
                    is_unapproved: false,
                    best_answer: None,
                    poll: None,
                },
            }
        }
    }

    #[test]
    fn default_thread() {
        let thread = Thread::build().id(3).title("foo").finish();
        assert_eq!(thread.id, ThreadId::new(3));
        assert_eq!(thread.weight, ThreadWeight::Default);
        assert!(!thread.has_best_answer());
        assert!(!thread.has_poll());
    }
}
