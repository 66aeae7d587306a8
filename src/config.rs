use crate::model::{PropertySet, RuleType, Severity};

use RuleType::{Bug, CodeSmell, Vulnerability};
use Severity::{Blocker, Critical, Info, Major, Minor};

/// Overview pages whose rendered navigation menus list the individual warning
/// pages, each paired with default properties for the warnings it discovers.
pub static INDEX_PAGES: &[(&str, PropertySet)] = &[
    (
        "https://docs.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-4-c4001",
        PropertySet::rule(Info, CodeSmell),
    ),
    (
        "https://docs.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-levels-2-and-4-c4200",
        PropertySet::rule(Info, CodeSmell),
    ),
    (
        "https://docs.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-4-c4400",
        PropertySet::rule(Info, CodeSmell),
    ),
    (
        "https://docs.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-1-c4600",
        PropertySet::rule(Info, CodeSmell),
    ),
    (
        "https://docs.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-3-c4800",
        PropertySet::rule(Info, CodeSmell),
    ),
    (
        "https://docs.microsoft.com/en-us/cpp/code-quality/code-analysis-for-c-cpp-warnings",
        PropertySet::rule(Critical, CodeSmell),
    ),
    (
        "https://docs.microsoft.com/en-us/cpp/code-quality/code-analysis-for-cpp-corecheck",
        PropertySet::rule(Info, CodeSmell),
    ),
];

/// Per-code property overrides, applied last and always winning over page
/// defaults and anything derived from page content.
pub static OVERRIDES: &[(&str, PropertySet)] = &[
    // Compiler warnings C4000 - C5999
    ("C4020", PropertySet::rule(Major, Bug)),
    ("C4034", PropertySet::rule(Major, Bug)),
    ("C4056", PropertySet::rule(Major, Bug)),
    ("C4062", PropertySet::rule(Major, Bug)),
    ("C4130", PropertySet::rule(Major, Bug)),
    ("C4133", PropertySet::rule(Major, Bug)),
    ("C4138", PropertySet::rule(Major, Bug)),
    ("C4172", PropertySet::rule(Major, Bug)),
    ("C4243", PropertySet::rule(Major, Bug)),
    ("C4245", PropertySet::rule(Major, Bug)),
    ("C4291", PropertySet::rule(Major, Bug)),
    ("C4293", PropertySet::rule(Major, Bug)),
    ("C4295", PropertySet::rule(Major, Bug)),
    ("C4296", PropertySet::rule(Major, Bug)),
    ("C4309", PropertySet::rule(Major, Bug)),
    ("C4313", PropertySet::rule(Major, Bug)),
    ("C4317", PropertySet::rule(Major, Bug)),
    ("C4333", PropertySet::rule(Major, Bug)),
    ("C4339", PropertySet::rule(Major, Bug)),
    ("C4340", PropertySet::rule(Major, Bug)),
    ("C4341", PropertySet::rule(Major, Bug)),
    ("C4355", PropertySet::rule(Major, Bug)),
    ("C4356", PropertySet::rule(Major, Bug)),
    ("C4358", PropertySet::rule(Major, Bug)),
    ("C4359", PropertySet::rule(Major, Bug)),
    ("C4368", PropertySet::rule(Major, Bug)),
    ("C4405", PropertySet::rule(Major, Bug)),
    ("C4407", PropertySet::rule(Major, Bug)),
    ("C4422", PropertySet::rule(Major, Bug)),
    ("C4426", PropertySet::rule(Major, Bug)),
    ("C4473", PropertySet::rule(Major, Bug)),
    ("C4474", PropertySet::rule(Major, Bug)),
    ("C4477", PropertySet::rule(Major, Bug)),
    ("C4478", PropertySet::rule(Major, Bug)),
    ("C4526", PropertySet::rule(Major, Bug)),
    ("C4539", PropertySet::rule(Major, Bug)),
    ("C4541", PropertySet::rule(Major, Bug)),
    ("C4715", PropertySet::rule(Major, Bug)),
    ("C4716", PropertySet::rule(Major, Bug)),
    ("C4717", PropertySet::rule(Major, Bug)),
    ("C4756", PropertySet::rule(Major, Bug)),
    ("C4774", PropertySet::rule(Minor, CodeSmell)),
    ("C4777", PropertySet::rule(Minor, CodeSmell)),
    // Code analysis for C/C++ warnings
    ("C6001", PropertySet::rule(Critical, Bug)),
    ("C6011", PropertySet::rule(Critical, Bug)),
    ("C6014", PropertySet::rule(Blocker, Bug)),
    ("C6057", PropertySet::rule(Critical, Bug)),
    ("C6063", PropertySet::rule(Critical, Bug)),
    ("C6064", PropertySet::rule(Critical, Bug)),
    ("C6066", PropertySet::rule(Critical, Bug)),
    ("C6101", PropertySet::rule(Critical, Bug)),
    ("C6102", PropertySet::rule(Critical, Bug)),
    ("C6103", PropertySet::rule(Critical, Bug)),
    ("C6200", PropertySet::rule(Critical, Bug)),
    ("C6201", PropertySet::rule(Critical, Bug)),
    ("C6202", PropertySet::rule(Critical, Bug)),
    ("C6203", PropertySet::rule(Critical, Bug)),
    ("C6235", PropertySet::rule(Critical, Bug)),
    ("C6236", PropertySet::rule(Critical, Bug)),
    ("C6237", PropertySet::rule(Critical, Bug)),
    ("C6239", PropertySet::rule(Critical, Bug)),
    ("C6240", PropertySet::rule(Critical, Bug)),
    ("C6260", PropertySet::rule(Critical, Bug)),
    ("C6272", PropertySet::rule(Critical, Bug)),
    ("C6277", PropertySet::rule(Critical, Vulnerability)),
    ("C6278", PropertySet::rule(Critical, Bug)),
    ("C6279", PropertySet::rule(Critical, Bug)),
    ("C6283", PropertySet::rule(Critical, Bug)),
    ("C6287", PropertySet::rule(Critical, Bug)),
    ("C6294", PropertySet::rule(Critical, Bug)),
    ("C6295", PropertySet::rule(Critical, Bug)),
    ("C6296", PropertySet::rule(Critical, Bug)),
    ("C6299", PropertySet::rule(Critical, Bug)),
    ("C6308", PropertySet::rule(Critical, Bug)),
    ("C6318", PropertySet::rule(Critical, Bug)),
    ("C6322", PropertySet::rule(Critical, Bug)),
    ("C6334", PropertySet::rule(Critical, Bug)),
    ("C6335", PropertySet::rule(Critical, Bug)),
    ("C6383", PropertySet::rule(Critical, Bug)),
    ("C6535", PropertySet::rule(Critical, Bug)),
    // C++ Core Guidelines checker warnings
    ("C26100", PropertySet::rule(Critical, CodeSmell)),
    ("C26101", PropertySet::rule(Critical, CodeSmell)),
    ("C26105", PropertySet::rule(Critical, CodeSmell)),
    ("C26110", PropertySet::rule(Critical, CodeSmell)),
    ("C26111", PropertySet::rule(Critical, CodeSmell)),
    ("C26112", PropertySet::rule(Critical, CodeSmell)),
    ("C26115", PropertySet::rule(Critical, CodeSmell)),
    ("C26116", PropertySet::rule(Critical, CodeSmell)),
    ("C26117", PropertySet::rule(Critical, CodeSmell)),
    ("C26130", PropertySet::rule(Critical, CodeSmell)),
    ("C26135", PropertySet::rule(Critical, CodeSmell)),
    ("C26140", PropertySet::rule(Critical, CodeSmell)),
    ("C26160", PropertySet::rule(Critical, CodeSmell)),
    ("C26165", PropertySet::rule(Critical, CodeSmell)),
    ("C26166", PropertySet::rule(Critical, CodeSmell)),
    ("C26167", PropertySet::rule(Critical, CodeSmell)),
    ("C26400", PropertySet::rule(Critical, CodeSmell)),
    ("C26401", PropertySet::rule(Blocker, Bug)),
    ("C26402", PropertySet::rule(Blocker, Bug)),
    ("C26403", PropertySet::rule(Blocker, Bug)),
    ("C26404", PropertySet::rule(Blocker, Bug)),
    ("C26405", PropertySet::rule(Blocker, Bug)),
    ("C26406", PropertySet::rule(Blocker, CodeSmell)),
    ("C26407", PropertySet::rule(Blocker, CodeSmell)),
    ("C26408", PropertySet::rule(Critical, CodeSmell)),
    ("C26409", PropertySet::rule(Blocker, Bug)),
    ("C26410", PropertySet::rule(Critical, CodeSmell)),
    ("C26411", PropertySet::rule(Blocker, Bug)),
    ("C26412", PropertySet::rule(Major, CodeSmell)),
    ("C26423", PropertySet::rule(Major, CodeSmell)),
    ("C26424", PropertySet::rule(Major, CodeSmell)),
    ("C26453", PropertySet::rule(Blocker, Bug)),
    ("C26454", PropertySet::rule(Blocker, Bug)),
    ("C26460", PropertySet::rule(Major, CodeSmell)),
    ("C26461", PropertySet::rule(Major, CodeSmell)),
    ("C26462", PropertySet::rule(Major, CodeSmell)),
    ("C26463", PropertySet::rule(Major, CodeSmell)),
    ("C26464", PropertySet::rule(Major, CodeSmell)),
    ("C26465", PropertySet::rule(Major, CodeSmell)),
    ("C26466", PropertySet::rule(Major, CodeSmell)),
    ("C26470", PropertySet::rule(Critical, Bug)),
    ("C26471", PropertySet::rule(Critical, Bug)),
    ("C26481", PropertySet::rule(Critical, Bug)),
    ("C26482", PropertySet::rule(Critical, CodeSmell)),
    ("C26483", PropertySet::rule(Critical, Bug)),
    ("C26485", PropertySet::rule(Critical, CodeSmell)),
    ("C26486", PropertySet::rule(Critical, CodeSmell)),
    ("C26487", PropertySet::rule(Critical, CodeSmell)),
    ("C26489", PropertySet::rule(Blocker, Bug)),
    ("C26490", PropertySet::rule(Critical, CodeSmell)),
    ("C26491", PropertySet::rule(Critical, CodeSmell)),
    ("C26492", PropertySet::rule(Critical, CodeSmell)),
    ("C26493", PropertySet::rule(Critical, CodeSmell)),
    ("C26494", PropertySet::rule(Major, Bug)),
    ("C26495", PropertySet::rule(Major, Bug)),
    ("C26496", PropertySet::rule(Major, CodeSmell)),
    ("C26497", PropertySet::rule(Major, CodeSmell)),
    ("C26498", PropertySet::rule(Major, CodeSmell)),
    ("C28103", PropertySet::rule(Info, Bug)),
    ("C28105", PropertySet::rule(Info, Bug)),
    ("C28114", PropertySet::rule(Blocker, Bug)),
];
