//! Built-in Apollo Odyssey course table.

use crate::model::catalog::CatalogBuilder;

pub const TUTORIALS_BASE_URL: &str = "https://www.apollographql.com/tutorials/";

pub(crate) fn builder() -> CatalogBuilder {
    CatalogBuilder::new(TUTORIALS_BASE_URL)
        .certification(
            "Associate",
            "Apollo Graph Developer - Associate",
            Some("Complete all courses to earn your Associate certification"),
        )
        .certification(
            "Professional",
            "Apollo Graph Developer - Professional",
            Some("Complete all courses to earn your Professional certification"),
        )
        .certified_course(
            "lift-off-part1/v2",
            "Lift-off I: Basics",
            &["Everyone"],
            "Associate",
            1,
        )
        .certified_course(
            "lift-off-part2/v2",
            "Lift-off II: Resolvers",
            &["Everyone"],
            "Associate",
            2,
        )
        .certified_course(
            "lift-off-part3/v2",
            "Lift-off III: Arguments",
            &["Everyone"],
            "Associate",
            3,
        )
        .certified_course(
            "lift-off-part4/v2",
            "Lift-off IV: Mutations",
            &["Everyone"],
            "Associate",
            4,
        )
        .certified_course(
            "voyage-part1",
            "Voyage I: Federation from Day One",
            &["Advanced"],
            "Professional",
            1,
        )
        .certified_course(
            "voyage-part2",
            "Voyage II: Federating the Monolith",
            &["Advanced"],
            "Professional",
            2,
        )
        .certified_course(
            "voyage-part3",
            "Voyage III: Federation in Production",
            &["Advanced"],
            "Professional",
            3,
        )
        .course(
            "introduction-to-federation",
            "Introduction to Apollo Federation",
            &["Everyone"],
        )
        .course(
            "side-quest-intermediate-schema-design",
            "Intermediate Schema Design",
            &["Advanced"],
        )
        .course(
            "schema-design-best-practices",
            "Enterprise best practices: Schema design",
            &["Advanced"],
        )
        .course(
            "effective-stewardship",
            "Enterprise best practices: Effective supergraph stewardship",
            &["Advanced"],
        )
        .course(
            "contracts",
            "Enterprise best practices: Contracts",
            &["Advanced"],
        )
        .course(
            "side-quest-auth",
            "Authentication & Authorization",
            &["Advanced"],
        )
        .course(
            "router-performance",
            "Performance in the router",
            &["Advanced"],
        )
        .course(
            "supergraph-observability",
            "Enterprise best practices: Supergraph observability",
            &["Advanced"],
        )
        .course(
            "router-extensibility",
            "Enterprise best practices: Router extensibility",
            &["Advanced"],
        )
        .course(
            "apollo-kotlin-android-part1",
            "Android Development with Apollo Kotlin: Codegen and Queries",
            &["Android"],
        )
        .course(
            "apollo-kotlin-android-part2",
            "Android Development with Apollo Kotlin: Pagination, Mutations, and Subscriptions",
            &["Android"],
        )
        .course(
            "intro-hotchocolate",
            "Intro to GraphQL with .NET (C#) & Hot Chocolate",
            &["Backend"],
        )
        .course(
            "federation-hotchocolate",
            "Federation with .NET (C#) & Hot Chocolate",
            &["Backend"],
        )
        .course(
            "client-side-graphql-react",
            "Client-side GraphQL with React & Apollo",
            &["Frontend"],
        )
        .course(
            "apollo-ios-swift-part1",
            "Apollo iOS and Swift: Codegen and Queries",
            &["iOS"],
        )
        .course(
            "apollo-ios-swift-part2",
            "Apollo iOS and Swift: Pagination, Mutations, and Subscriptions",
            &["iOS"],
        )
        .course(
            "testing",
            "Enterprise best practices: Testing",
            &["Android", "iOS", "Frontend"],
        )
}
