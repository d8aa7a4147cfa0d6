//! Request paths for the Space-Track API.
//!
//! Queries use the `basicspacedata` controller's path syntax:
//! `/class/<class>/<FIELD>/<value>/.../format/json/orderby/<FIELD [DESC]>`.
//! Values are percent-encoded, so `>now-7` becomes `%3Enow-7`.

use sat_core::Category;

pub const LOGIN_PATH: &str = "/ajaxauth/login";
pub const LOGOUT_PATH: &str = "/ajaxauth/logout";

/// Path and query string for one category.
#[must_use]
pub fn path_for(category: Category) -> String {
    match category {
        Category::ActiveObjects => basic_query(
            "tle_latest",
            &[("ORDINAL", "1"), ("EPOCH", ">now-7")],
            "NORAD_CAT_ID",
        ),
        Category::Debris => basic_query(
            "tle_latest",
            &[
                ("ORDINAL", "1"),
                ("EPOCH", ">now-30"),
                ("OBJECT_TYPE", "DEBRIS"),
            ],
            "NORAD_CAT_ID",
        ),
        Category::Conjunctions => basic_query(
            "cdm_public",
            &[("TCA", ">now-7"), ("PC", ">0.001")],
            "TCA DESC",
        ),
    }
}

fn basic_query(class: &str, predicates: &[(&str, &str)], order_by: &str) -> String {
    let mut path = String::from("/basicspacedata/query/class/");
    path.push_str(class);
    for (field, value) in predicates {
        path.push('/');
        path.push_str(field);
        path.push('/');
        path.push_str(&urlencoding::encode(value));
    }
    path.push_str("/format/json/orderby/");
    path.push_str(&urlencoding::encode(order_by));
    path
}
