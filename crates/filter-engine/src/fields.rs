//! 默认字段目录
//!
//! 进程级只读参考数据：无插件认领某字段时，用这里的
//! (字段, 描述) 生成通用过滤器。

/// 默认可过滤字段及其人类可读描述
const FILTER_FIELDS: &[(&str, &str)] = &[
    ("link_count", "The amount of links found for this element. (#)"),
    ("type", "The type of post this is. (\"Submission\" or \"Comment\")"),
    ("title", "The title of the submission containing this post. (Text)"),
    ("author", "The author of this element. (Text)"),
    (
        "body",
        "The text in this element. Blank if this post is a submission without selftext. (Text)",
    ),
    ("subreddit", "The subreddit this element is from. (Text)"),
    ("over_18", "If this post is age-limited, AKA \"NSFW\". (True/False)"),
    (
        "created_utc",
        "The timestamp, in UTC seconds, that this element was posted. (#)",
    ),
    ("num_comments", "The number of comments on this post. (#)"),
    ("score", "The number of net upvotes on this post. (#)"),
];

/// 返回完整的默认字段表
pub fn filter_fields() -> &'static [(&'static str, &'static str)] {
    FILTER_FIELDS
}
