use std::thread;

use chrono::Utc;
use company_directory::domain::company::Company;
use company_directory::domain::types::{CompanySize, CompanyType, CompanyUrl};
use company_directory::repository::{
    CompanyListQuery, CompanyReader, CompanySort, CompanyWriter,
};
use company_directory::schema::companies;
use diesel::prelude::*;

mod common;

use common::{TestDb, new_company, seed_companies};

fn names(items: &[Company]) -> Vec<&str> {
    items.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_create_company_assigns_id_and_timestamps() {
    let test_db = TestDb::new("test_create_company.db");
    let repo = test_db.repository();

    let new = new_company(
        "Acme",
        "Technology",
        "Austin, TX",
        CompanySize::Micro,
        CompanyType::Private,
    )
    .with_website(CompanyUrl::new("https://acme.com").unwrap())
    .with_founded(1999);

    let created = repo.create_company(&new).unwrap();

    assert!(created.id.get() > 0);
    assert_eq!(created.name.as_str(), "Acme");
    assert_eq!(created.size, CompanySize::Micro);
    assert_eq!(created.company_type, CompanyType::Private);
    assert_eq!(created.founded, Some(1999));
    assert_eq!(
        created.website.as_ref().map(CompanyUrl::as_str),
        Some("https://acme.com")
    );
    assert_eq!(created.created_at, created.updated_at);

    let (total, items) = repo
        .list_companies(CompanyListQuery::new().search("Acme"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, created.id);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let test_db = TestDb::new("test_search.db");
    let repo = test_db.repository();
    seed_companies(&repo);

    let (total, items) = repo
        .list_companies(CompanyListQuery::new().search("ACME"))
        .unwrap();

    assert_eq!(total, 2);
    assert_eq!(names(&items), vec!["Acme", "acme labs"]);

    let (total, _) = repo
        .list_companies(CompanyListQuery::new().search("lobe"))
        .unwrap();
    assert_eq!(total, 1);
}

#[test]
fn test_search_folds_non_ascii_case() {
    let test_db = TestDb::new("test_search_unicode.db");
    let repo = test_db.repository();
    seed_companies(&repo);
    for name in ["Émile Éditions", "Straße Logistik", "ÖKO Bau"] {
        repo.create_company(&new_company(
            name,
            "Retail",
            "Berlin, BE",
            CompanySize::Small,
            CompanyType::Private,
        ))
        .unwrap();
    }

    let (total, items) = repo
        .list_companies(CompanyListQuery::new().search("émile"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(names(&items), vec!["Émile Éditions"]);

    let (total, _) = repo
        .list_companies(CompanyListQuery::new().search("ÉDITIONS"))
        .unwrap();
    assert_eq!(total, 1);

    let (total, items) = repo
        .list_companies(CompanyListQuery::new().search("öko"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(names(&items), vec!["ÖKO Bau"]);

    let (total, _) = repo
        .list_companies(CompanyListQuery::new().search("STRASSE"))
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_search_treats_wildcards_literally() {
    let test_db = TestDb::new("test_search_wildcards.db");
    let repo = test_db.repository();
    seed_companies(&repo);

    let (total, items) = repo
        .list_companies(CompanyListQuery::new().search("%"))
        .unwrap();
    assert_eq!(total, 0);
    assert!(items.is_empty());

    let (total, _) = repo
        .list_companies(CompanyListQuery::new().search("_"))
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_filters_are_anded_and_total_matches() {
    let test_db = TestDb::new("test_filters.db");
    let repo = test_db.repository();
    let seeded = seed_companies(&repo);

    let searches = [None, Some("acme"), Some("e")];
    let industries = [None, Some("Technology"), Some("Healthcare")];
    let locations = [None, Some("Austin, TX")];
    let sizes = [None, Some("1-10"), Some("201-500")];
    let types = [None, Some("Private"), Some("Government")];

    for search in searches {
        for industry in industries {
            for location in locations {
                for size in sizes {
                    for company_type in types {
                        let mut query = CompanyListQuery::new();
                        if let Some(v) = search {
                            query = query.search(v);
                        }
                        if let Some(v) = industry {
                            query = query.industry(v);
                        }
                        if let Some(v) = location {
                            query = query.location(v);
                        }
                        if let Some(v) = size {
                            query = query.size(v);
                        }
                        if let Some(v) = company_type {
                            query = query.company_type(v);
                        }

                        let matches = |c: &Company| {
                            search.is_none_or(|s| {
                                c.name.to_lowercase().contains(&s.to_lowercase())
                            }) && industry.is_none_or(|v| c.industry.as_str() == v)
                                && location.is_none_or(|v| c.location.as_str() == v)
                                && size.is_none_or(|v| c.size.as_str() == v)
                                && company_type.is_none_or(|v| c.company_type.as_str() == v)
                        };

                        let (total, items) = repo.list_companies(query).unwrap();

                        assert!(items.iter().all(|c| matches(c)));
                        assert_eq!(total, seeded.iter().filter(|c| matches(*c)).count());
                        assert_eq!(items.len(), total);
                    }
                }
            }
        }
    }
}

#[test]
fn test_sort_by_name_is_ascending() {
    let test_db = TestDb::new("test_sort_name.db");
    let repo = test_db.repository();
    seed_companies(&repo);

    let (_, items) = repo
        .list_companies(CompanyListQuery::new().sort(CompanySort::Name))
        .unwrap();

    assert!(
        items
            .windows(2)
            .all(|pair| pair[0].name.as_str() <= pair[1].name.as_str())
    );
}

#[test]
fn test_sort_by_created_at_is_newest_first() {
    let test_db = TestDb::new("test_sort_created.db");
    let repo = test_db.repository();
    let seeded = seed_companies(&repo);

    let (_, items) = repo
        .list_companies(CompanyListQuery::new().sort(CompanySort::CreatedAt))
        .unwrap();

    assert!(
        items
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at)
    );
    assert_eq!(items[0].id, seeded.last().unwrap().id);
}

#[test]
fn test_pagination_slices_results() {
    let test_db = TestDb::new("test_pagination.db");
    let repo = test_db.repository();

    for i in 0..25 {
        repo.create_company(&new_company(
            &format!("Company {i:02}"),
            "Retail",
            "Seattle, WA",
            CompanySize::Small,
            CompanyType::Private,
        ))
        .unwrap();
    }

    let (total, first) = repo
        .list_companies(CompanyListQuery::new().paginate(1, 10))
        .unwrap();
    assert_eq!(total, 25);
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].name.as_str(), "Company 00");

    let (total, third) = repo
        .list_companies(CompanyListQuery::new().paginate(3, 10))
        .unwrap();
    assert_eq!(total, 25);
    assert_eq!(
        names(&third),
        vec![
            "Company 20",
            "Company 21",
            "Company 22",
            "Company 23",
            "Company 24"
        ]
    );

    let (total, beyond) = repo
        .list_companies(CompanyListQuery::new().paginate(4, 10))
        .unwrap();
    assert_eq!(total, 25);
    assert!(beyond.is_empty());
}

#[test]
fn test_duplicate_names_create_distinct_records() {
    let test_db = TestDb::new("test_duplicates.db");
    let repo = test_db.repository();

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let repo = repo.clone();
            thread::spawn(move || {
                repo.create_company(&new_company(
                    "Acme",
                    "Technology",
                    "Austin, TX",
                    CompanySize::Micro,
                    CompanyType::Private,
                ))
            })
        })
        .collect();

    let created: Vec<Company> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();

    assert_ne!(created[0].id, created[1].id);

    let (total, _) = repo
        .list_companies(CompanyListQuery::new().search("Acme"))
        .unwrap();
    assert_eq!(total, 2);
}

#[test]
fn test_store_rejects_out_of_set_size() {
    let test_db = TestDb::new("test_check_size.db");
    let mut conn = test_db.pool().get().unwrap();
    let now = Utc::now().naive_utc();

    let result = diesel::insert_into(companies::table)
        .values((
            companies::name.eq("Acme"),
            companies::industry.eq("Technology"),
            companies::location.eq("Austin, TX"),
            companies::size.eq("huge"),
            companies::company_type.eq("Private"),
            companies::created_at.eq(now),
            companies::updated_at.eq(now),
        ))
        .execute(&mut conn);

    assert!(result.is_err());

    let count: i64 = companies::table.count().get_result(&mut conn).unwrap();
    assert_eq!(count, 0);
}
