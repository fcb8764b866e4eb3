pub const SELECT_MOST_VIEWED_ARTICLES_QUERY: &str = r#"
                SELECT articles.title AS title, COUNT(*) AS views
                FROM articles
                JOIN log ON log.path = '/article/' || articles.slug
                GROUP BY articles.title
                ORDER BY views DESC
                LIMIT $1
                "#;
pub const SELECT_AUTHORS_BY_VIEWS_QUERY: &str = r#"
                SELECT authors.name AS name, COUNT(*) AS views
                FROM authors
                JOIN articles ON articles.author = authors.id
                JOIN log ON log.path = '/article/' || articles.slug
                GROUP BY authors.name
                ORDER BY views DESC
                "#;
