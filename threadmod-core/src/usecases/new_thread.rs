use super::prelude::*;
use thiserror::Error;

/// Fields of a thread that is going to be created
/// by splitting posts or merging threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThreadRequest {
    pub title: String,
    pub category: CategoryId,
    pub weight: Option<ThreadWeight>,
    pub is_hidden: Option<bool>,
    pub is_closed: Option<bool>,
}

impl NewThreadRequest {
    pub fn new(title: impl Into<String>, category: impl Into<CategoryId>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            weight: None,
            is_hidden: None,
            is_closed: None,
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title     : String,
    pub category  : Category,
    pub weight    : ThreadWeight,
    pub is_hidden : bool,
    pub is_closed : bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewThreadInvalidation {
    #[error("Thread title should contain alpha-numeric characters.")]
    TitleNotSluggable,
    #[error("Thread title should be at least {min} characters long (it has {length}).")]
    TitleTooShort { min: usize, length: usize },
    #[error("Thread title should be at most {max} characters long (it has {length}).")]
    TitleTooLong { max: usize, length: usize },
    #[error("Requested category could not be found.")]
    CategoryNotFound,
    #[error("You can't create new threads in selected category.")]
    CannotStartThreads,
    #[error("You don't have permission to pin threads globally in this category.")]
    CannotPinGlobally,
    #[error("You don't have permission to pin threads in this category.")]
    CannotPin,
    #[error("You don't have permission to hide threads in this category.")]
    CannotHide,
    #[error("You don't have permission to close threads in this category.")]
    CannotClose,
}

type Invalidation<T> = std::result::Result<T, NewThreadInvalidation>;

fn validate_title(limits: &Limits, title: &str) -> Invalidation<String> {
    let title = title.trim();
    if !title.chars().any(char::is_alphanumeric) {
        return Err(NewThreadInvalidation::TitleNotSluggable);
    }
    let length = title.chars().count();
    if length < limits.thread_title_min_length {
        return Err(NewThreadInvalidation::TitleTooShort {
            min: limits.thread_title_min_length,
            length,
        });
    }
    if length > limits.thread_title_max_length {
        return Err(NewThreadInvalidation::TitleTooLong {
            max: limits.thread_title_max_length,
            length,
        });
    }
    Ok(title.to_owned())
}

// Checks the optional fields against the already attached ACL.
fn validate_moderation_fields(
    acl: &CategoryAcl,
    request: &NewThreadRequest,
) -> Invalidation<(ThreadWeight, bool, bool)> {
    let weight = request.weight.unwrap_or_default();
    if !acl.can_pin_with(weight) {
        return Err(match weight {
            ThreadWeight::PinnedGlobally => NewThreadInvalidation::CannotPinGlobally,
            _ => NewThreadInvalidation::CannotPin,
        });
    }
    let is_hidden = request.is_hidden.unwrap_or_default();
    if is_hidden && !acl.can_hide_threads {
        return Err(NewThreadInvalidation::CannotHide);
    }
    let is_closed = request.is_closed.unwrap_or_default();
    if is_closed && !acl.can_close_threads {
        return Err(NewThreadInvalidation::CannotClose);
    }
    Ok((weight, is_hidden, is_closed))
}

/// Validates the fields of a new thread.
///
/// The category and its ACL are resolved first. The pinning,
/// hiding and closing permissions are only checked once this
/// succeeded.
pub fn validate_new_thread<R>(ctx: &Context<R>, request: &NewThreadRequest) -> Result<NewThread>
where
    R: CategoryRepo,
{
    let title = validate_title(&ctx.limits, &request.title)?;

    let category = match ctx.repo.get_category(request.category) {
        Ok(category) if category.is_threads_tree => category,
        Ok(_) | Err(RepoError::NotFound) => {
            return Err(NewThreadInvalidation::CategoryNotFound.into());
        }
        Err(err) => return Err(err.into()),
    };
    let acl = ctx.acl.category_acl(ctx.user, category.id)?;
    if !acl.can_see_and_browse() {
        return Err(NewThreadInvalidation::CategoryNotFound.into());
    }
    if !acl.can_start_threads {
        return Err(NewThreadInvalidation::CannotStartThreads.into());
    }

    let (weight, is_hidden, is_closed) = validate_moderation_fields(&acl, request)?;
    Ok(NewThread {
        title,
        category,
        weight,
        is_hidden,
        is_closed,
    })
}
