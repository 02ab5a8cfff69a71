use super::model::{MenuEntry, MenuIcon, MenuSection};

const COURSE_ENTRIES: &[MenuEntry] = &[
    MenuEntry::new(
        "list",
        "Danh sách khóa học",
        MenuIcon::List,
        "/courses?tab=list",
    ),
    MenuEntry::new(
        "create",
        "Thêm khóa học",
        MenuIcon::Add,
        "/courses?tab=create",
    ),
    MenuEntry::new(
        "categories",
        "Danh mục khóa học",
        MenuIcon::Folder,
        "/courses?tab=categories",
    ),
];

const EXAM_ENTRIES: &[MenuEntry] = &[
    MenuEntry::new(
        "list",
        "Danh sách đề thi",
        MenuIcon::List,
        "/exams?tab=list",
    ),
    MenuEntry::new("create", "Tạo đề thi", MenuIcon::Add, "/exams?tab=create"),
    MenuEntry::new(
        "questions",
        "Ngân hàng câu hỏi",
        MenuIcon::Question,
        "/exams?tab=questions",
    ),
    MenuEntry::new(
        "results",
        "Kết quả thi",
        MenuIcon::Chart,
        "/exams?tab=results",
    ),
];

const BOOK_ENTRIES: &[MenuEntry] = &[
    MenuEntry::new("list", "Danh sách sách", MenuIcon::Book, "/books?tab=list"),
    MenuEntry::new("create", "Thêm sách", MenuIcon::Add, "/books?tab=create"),
    MenuEntry::new("orders", "Đơn hàng", MenuIcon::Cart, "/books?tab=orders"),
];

const MEMBER_ENTRIES: &[MenuEntry] = &[
    MenuEntry::new(
        "students",
        "Học viên",
        MenuIcon::Users,
        "/members?tab=students",
    ),
    MenuEntry::new(
        "teachers",
        "Giáo viên",
        MenuIcon::Users,
        "/members?tab=teachers",
    ),
    MenuEntry::new(
        "create",
        "Thêm thành viên",
        MenuIcon::Add,
        "/members?tab=create",
    ),
];

const FILE_ENTRIES: &[MenuEntry] = &[
    MenuEntry::new("all", "Tất cả tệp", MenuIcon::Folder, "/files?tab=all"),
    MenuEntry::new("upload", "Tải lên", MenuIcon::Upload, "/files?tab=upload"),
    MenuEntry::new("trash", "Thùng rác", MenuIcon::Trash, "/files?tab=trash"),
];

const PROMOTION_ENTRIES: &[MenuEntry] = &[
    MenuEntry::new(
        "coupons",
        "Mã giảm giá",
        MenuIcon::Ticket,
        "/promotions?tab=coupons",
    ),
    MenuEntry::new(
        "campaigns",
        "Chiến dịch khuyến mãi",
        MenuIcon::Calendar,
        "/promotions?tab=campaigns",
    ),
    MenuEntry::new(
        "history",
        "Lịch sử áp dụng",
        MenuIcon::Chart,
        "/promotions?tab=history",
    ),
];

const SECTIONS: &[MenuSection] = &[
    MenuSection {
        id: "courses",
        title: "Quản lý khóa học",
        icon: MenuIcon::Book,
        entries: COURSE_ENTRIES,
    },
    MenuSection {
        id: "exams",
        title: "Quản lý đề thi",
        icon: MenuIcon::Question,
        entries: EXAM_ENTRIES,
    },
    MenuSection {
        id: "books",
        title: "Quản lý sách",
        icon: MenuIcon::Book,
        entries: BOOK_ENTRIES,
    },
    MenuSection {
        id: "members",
        title: "Quản lý thành viên",
        icon: MenuIcon::Users,
        entries: MEMBER_ENTRIES,
    },
    MenuSection {
        id: "files",
        title: "Quản lý tệp",
        icon: MenuIcon::Folder,
        entries: FILE_ENTRIES,
    },
    MenuSection {
        id: "promotions",
        title: "Khuyến mãi",
        icon: MenuIcon::Ticket,
        entries: PROMOTION_ENTRIES,
    },
];

/// Return every dashboard section in sidebar order.
pub fn sections() -> &'static [MenuSection] {
    SECTIONS
}

/// Look up a dashboard section by id.
pub fn section(id: &str) -> Option<&'static MenuSection> {
    SECTIONS.iter().find(|section| section.id == id)
}
