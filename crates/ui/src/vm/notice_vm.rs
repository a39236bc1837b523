use services::{Notice, NoticeKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub class: &'static str,
    pub message: String,
}

impl From<&Notice> for NoticeVm {
    fn from(notice: &Notice) -> Self {
        let class = match notice.kind() {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
            NoticeKind::Blocking => "notice notice--blocking",
        };
        Self {
            class,
            message: notice.message().to_owned(),
        }
    }
}

impl From<Notice> for NoticeVm {
    fn from(notice: Notice) -> Self {
        Self::from(&notice)
    }
}
