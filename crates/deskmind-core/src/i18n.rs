//! Language registry and localized string tables.
//!
//! Every user-facing string the assistant produces (system prompts,
//! greetings, fallback phrasing, knowledge-base document names, console
//! labels) is keyed by [`Language`] and resolved through one enum-based
//! lookup. English is the defined fallback for unrecognized codes.

use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Pt,
    Fr,
    De,
    It,
    Zh,
    Ja,
}

impl Language {
    /// All supported languages, in picker order.
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Es,
        Language::Pt,
        Language::Fr,
        Language::De,
        Language::It,
        Language::Zh,
        Language::Ja,
    ];

    /// Resolve an ISO 639-1 code. Unrecognized codes fall back to English.
    pub fn from_code(code: &str) -> Language {
        match code {
            "es" => Language::Es,
            "pt" => Language::Pt,
            "fr" => Language::Fr,
            "de" => Language::De,
            "it" => Language::It,
            "zh" => Language::Zh,
            "ja" => Language::Ja,
            _ => Language::En,
        }
    }

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Pt => "pt",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
            Language::Zh => "zh",
            Language::Ja => "ja",
        }
    }

    /// Native display name.
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Pt => "Português",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::It => "Italiano",
            Language::Zh => "中文",
            Language::Ja => "日本語",
        }
    }

    /// Flag glyph shown in the language picker.
    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::Es => "🇪🇸",
            Language::Pt => "🇧🇷",
            Language::Fr => "🇫🇷",
            Language::De => "🇩🇪",
            Language::It => "🇮🇹",
            Language::Zh => "🇨🇳",
            Language::Ja => "🇯🇵",
        }
    }

    /// System instruction prepended to every provider request.
    pub fn system_prompt(self) -> &'static str {
        match self {
            Language::En => "You are a helpful AI technical support assistant. You provide clear, accurate, and helpful responses to technical questions. Always be professional and concise. If you reference documentation, mention specific document names that might be helpful.",
            Language::Es => "Eres un asistente de soporte técnico IA útil. Proporcionas respuestas claras, precisas y útiles a preguntas técnicas. Siempre sé profesional y conciso. Si haces referencia a documentación, menciona nombres específicos de documentos que podrían ser útiles.",
            Language::Pt => "Você é um assistente de suporte técnico IA útil. Você fornece respostas claras, precisas e úteis para perguntas técnicas. Sempre seja profissional e conciso. Se você referenciar documentação, mencione nomes específicos de documentos que podem ser úteis.",
            Language::Fr => "Vous êtes un assistant de support technique IA utile. Vous fournissez des réponses claires, précises et utiles aux questions techniques. Soyez toujours professionnel et concis. Si vous référencez de la documentation, mentionnez des noms de documents spécifiques qui pourraient être utiles.",
            Language::De => "Sie sind ein hilfreicher KI-technischer Support-Assistent. Sie geben klare, genaue und hilfreiche Antworten auf technische Fragen. Seien Sie immer professionell und prägnant. Wenn Sie auf Dokumentation verweisen, erwähnen Sie spezifische Dokumentnamen, die hilfreich sein könnten.",
            Language::It => "Sei un assistente di supporto tecnico AI utile. Fornisci risposte chiare, accurate e utili alle domande tecniche. Sii sempre professionale e conciso. Se fai riferimento alla documentazione, menziona nomi specifici di documenti che potrebbero essere utili.",
            Language::Zh => "您是一个有用的AI技术支持助手。您为技术问题提供清晰、准确和有用的回答。始终保持专业和简洁。如果您引用文档，请提及可能有用的具体文档名称。",
            Language::Ja => "あなたは役立つAI技術サポートアシスタントです。技術的な質問に対して明確で正確で役立つ回答を提供します。常にプロフェッショナルで簡潔にしてください。ドキュメントを参照する場合は、役立つ可能性のある具体的なドキュメント名を言及してください。",
        }
    }

    /// Greeting seeded into a fresh conversation.
    pub fn greeting(self) -> &'static str {
        match self {
            Language::En => "Hello! I'm your AI technical support assistant. I can help you with questions about our system, troubleshoot issues, and provide documentation. How can I assist you today?",
            Language::Es => "¡Hola! Soy tu asistente de soporte técnico con IA. Puedo ayudarte con preguntas sobre nuestro sistema, solucionar problemas y proporcionar documentación. ¿Cómo puedo ayudarte hoy?",
            Language::Pt => "Olá! Sou seu assistente de suporte técnico com IA. Posso ajudá-lo com perguntas sobre nosso sistema, solucionar problemas e fornecer documentação. Como posso ajudá-lo hoje?",
            Language::Fr => "Bonjour ! Je suis votre assistant de support technique IA. Je peux vous aider avec des questions sur notre système, résoudre des problèmes et fournir de la documentation. Comment puis-je vous aider aujourd'hui ?",
            Language::De => "Hallo! Ich bin Ihr KI-technischer Support-Assistent. Ich kann Ihnen bei Fragen zu unserem System helfen, Probleme beheben und Dokumentation bereitstellen. Wie kann ich Ihnen heute helfen?",
            Language::It => "Ciao! Sono il tuo assistente di supporto tecnico AI. Posso aiutarti con domande sul nostro sistema, risolvere problemi e fornire documentazione. Come posso aiutarti oggi?",
            Language::Zh => "您好！我是您的AI技术支持助手。我可以帮助您解答系统问题、排除故障并提供文档。今天我能为您做些什么？",
            Language::Ja => "こんにちは！私はあなたのAI技術サポートアシスタントです。システムに関する質問、問題のトラブルシューティング、ドキュメントの提供をお手伝いできます。今日はどのようにお手伝いしましょうか？",
        }
    }

    /// Opening phrases for the local fallback. One is chosen uniformly at
    /// random per fallback turn.
    pub fn openers(self) -> [&'static str; 5] {
        match self {
            Language::En => [
                "I can help you with that. Let me search through our documentation and knowledge base for the most relevant information.",
                "Based on the technical documentation, here's what I found that should resolve your issue:",
                "This is a common question. According to our FAQ and system documentation:",
                "I've found several relevant articles in our knowledge base that address this topic:",
                "Let me provide you with a step-by-step solution based on our technical guides:",
            ],
            Language::Es => [
                "Puedo ayudarte con eso. Déjame buscar en nuestra documentación y base de conocimientos la información más relevante.",
                "Basándome en la documentación técnica, esto es lo que encontré que debería resolver tu problema:",
                "Esta es una pregunta común. Según nuestras FAQ y documentación del sistema:",
                "He encontrado varios artículos relevantes en nuestra base de conocimientos que abordan este tema:",
                "Permíteme proporcionarte una solución paso a paso basada en nuestras guías técnicas:",
            ],
            Language::Pt => [
                "Posso ajudá-lo com isso. Deixe-me pesquisar em nossa documentação e base de conhecimento as informações mais relevantes.",
                "Com base na documentação técnica, aqui está o que encontrei que deve resolver seu problema:",
                "Esta é uma pergunta comum. De acordo com nossas FAQ e documentação do sistema:",
                "Encontrei vários artigos relevantes em nossa base de conhecimento que abordam este tópico:",
                "Deixe-me fornecer uma solução passo a passo baseada em nossos guias técnicos:",
            ],
            Language::Fr => [
                "Je peux vous aider avec cela. Laissez-moi rechercher dans notre documentation et base de connaissances les informations les plus pertinentes.",
                "Basé sur la documentation technique, voici ce que j'ai trouvé qui devrait résoudre votre problème:",
                "C'est une question courante. Selon notre FAQ et documentation système:",
                "J'ai trouvé plusieurs articles pertinents dans notre base de connaissances qui traitent de ce sujet:",
                "Permettez-moi de vous fournir une solution étape par étape basée sur nos guides techniques:",
            ],
            Language::De => [
                "Ich kann Ihnen dabei helfen. Lassen Sie mich in unserer Dokumentation und Wissensdatenbank nach den relevantesten Informationen suchen.",
                "Basierend auf der technischen Dokumentation habe ich folgendes gefunden, was Ihr Problem lösen sollte:",
                "Das ist eine häufige Frage. Laut unserer FAQ und Systemdokumentation:",
                "Ich habe mehrere relevante Artikel in unserer Wissensdatenbank gefunden, die dieses Thema behandeln:",
                "Lassen Sie mich Ihnen eine Schritt-für-Schritt-Lösung basierend auf unseren technischen Leitfäden bereitstellen:",
            ],
            Language::It => [
                "Posso aiutarti con questo. Lasciami cercare nella nostra documentazione e base di conoscenza le informazioni più rilevanti.",
                "Basandomi sulla documentazione tecnica, ecco quello che ho trovato che dovrebbe risolvere il tuo problema:",
                "Questa è una domanda comune. Secondo le nostre FAQ e documentazione di sistema:",
                "Ho trovato diversi articoli rilevanti nella nostra base di conoscenza che affrontano questo argomento:",
                "Lasciami fornire una soluzione passo dopo passo basata sulle nostre guide tecniche:",
            ],
            Language::Zh => [
                "我可以帮助您解决这个问题。让我在我们的文档和知识库中搜索最相关的信息。",
                "根据技术文档，我找到了应该能解决您问题的内容：",
                "这是一个常见问题。根据我们的FAQ和系统文档：",
                "我在知识库中找到了几篇涉及此主题的相关文章：",
                "让我根据我们的技术指南为您提供分步解决方案：",
            ],
            Language::Ja => [
                "それについてお手伝いできます。最も関連性の高い情報について、ドキュメントとナレッジベースを検索させてください。",
                "技術文書に基づいて、問題を解決するために見つけた内容は次のとおりです：",
                "これはよくある質問です。FAQとシステムドキュメントによると：",
                "このトピックに関する関連記事をナレッジベースでいくつか見つけました：",
                "技術ガイドに基づいて、段階的な解決策を提供させてください：",
            ],
        }
    }

    /// Fixed follow-up tips block appended to every fallback reply.
    pub fn follow_up(self) -> &'static str {
        match self {
            Language::En => "Here's some specific information that might help:\n\n• Check the system logs for any error messages\n• Verify your configuration settings match the documentation\n• Try restarting the service if the issue persists\n• Contact our technical team if you need further assistance\n\nIs there anything specific about this solution you'd like me to explain further?",
            Language::Es => "Aquí tienes información específica que podría ayudar:\n\n• Revisa los registros del sistema en busca de mensajes de error\n• Verifica que tu configuración coincida con la documentación\n• Intenta reiniciar el servicio si el problema persiste\n• Contacta a nuestro equipo técnico si necesitas más ayuda\n\n¿Hay algo específico sobre esta solución que te gustaría que explique más detalladamente?",
            Language::Pt => "Aqui estão algumas informações específicas que podem ajudar:\n\n• Verifique os logs do sistema para mensagens de erro\n• Confirme se suas configurações correspondem à documentação\n• Tente reiniciar o serviço se o problema persistir\n• Entre em contato com nossa equipe técnica se precisar de mais assistência\n\nHá algo específico sobre esta solução que você gostaria que eu explicasse melhor?",
            Language::Fr => "Voici des informations spécifiques qui pourraient aider :\n\n• Vérifiez les journaux système pour tout message d'erreur\n• Vérifiez que vos paramètres de configuration correspondent à la documentation\n• Essayez de redémarrer le service si le problème persiste\n• Contactez notre équipe technique si vous avez besoin d'aide supplémentaire\n\nY a-t-il quelque chose de spécifique sur cette solution que vous aimeriez que j'explique davantage ?",
            Language::De => "Hier sind spezifische Informationen, die helfen könnten:\n\n• Überprüfen Sie die Systemprotokolle auf Fehlermeldungen\n• Stellen Sie sicher, dass Ihre Konfigurationseinstellungen der Dokumentation entsprechen\n• Versuchen Sie, den Service neu zu starten, wenn das Problem weiterhin besteht\n• Kontaktieren Sie unser technisches Team, wenn Sie weitere Hilfe benötigen\n\nGibt es etwas Spezifisches an dieser Lösung, das ich näher erklären soll?",
            Language::It => "Ecco alcune informazioni specifiche che potrebbero aiutare:\n\n• Controlla i log di sistema per eventuali messaggi di errore\n• Verifica che le tue impostazioni di configurazione corrispondano alla documentazione\n• Prova a riavviare il servizio se il problema persiste\n• Contatta il nostro team tecnico se hai bisogno di ulteriore assistenza\n\nC'è qualcosa di specifico su questa soluzione che vorresti che spiegassi meglio?",
            Language::Zh => "以下是一些可能有帮助的具体信息：\n\n• 检查系统日志中的错误消息\n• 验证您的配置设置是否与文档匹配\n• 如果问题仍然存在，请尝试重启服务\n• 如果需要进一步帮助，请联系我们的技术团队\n\n关于这个解决方案，您希望我进一步解释什么特定内容吗？",
            Language::Ja => "役立つ可能性のある具体的な情報は次のとおりです：\n\n• エラーメッセージについてシステムログを確認してください\n• 設定がドキュメントと一致していることを確認してください\n• 問題が続く場合は、サービスを再起動してみてください\n• さらなる支援が必要な場合は、技術チームにお問い合わせください\n\nこの解決策について、さらに詳しく説明してほしい特定の点はありますか？",
        }
    }

    /// Knowledge-base document names, in fixed topic order: installation,
    /// API, troubleshooting, configuration, security.
    pub fn knowledge_base(self) -> [&'static str; 5] {
        match self {
            Language::En => [
                "Installation Guide.pdf",
                "API Documentation.html",
                "Troubleshooting FAQ.md",
                "Configuration Manual.pdf",
                "Security Best Practices.pdf",
            ],
            Language::Es => [
                "Guía de Instalación.pdf",
                "Documentación de API.html",
                "FAQ de Solución de Problemas.md",
                "Manual de Configuración.pdf",
                "Mejores Prácticas de Seguridad.pdf",
            ],
            Language::Pt => [
                "Guia de Instalação.pdf",
                "Documentação da API.html",
                "FAQ de Solução de Problemas.md",
                "Manual de Configuração.pdf",
                "Melhores Práticas de Segurança.pdf",
            ],
            Language::Fr => [
                "Guide d'Installation.pdf",
                "Documentation API.html",
                "FAQ de Dépannage.md",
                "Manuel de Configuration.pdf",
                "Meilleures Pratiques de Sécurité.pdf",
            ],
            Language::De => [
                "Installationsanleitung.pdf",
                "API-Dokumentation.html",
                "Fehlerbehebungs-FAQ.md",
                "Konfigurationshandbuch.pdf",
                "Sicherheits-Best-Practices.pdf",
            ],
            Language::It => [
                "Guida all'Installazione.pdf",
                "Documentazione API.html",
                "FAQ Risoluzione Problemi.md",
                "Manuale di Configurazione.pdf",
                "Migliori Pratiche di Sicurezza.pdf",
            ],
            Language::Zh => [
                "安装指南.pdf",
                "API文档.html",
                "故障排除FAQ.md",
                "配置手册.pdf",
                "安全最佳实践.pdf",
            ],
            Language::Ja => [
                "インストールガイド.pdf",
                "APIドキュメント.html",
                "トラブルシューティングFAQ.md",
                "設定マニュアル.pdf",
                "セキュリティベストプラクティス.pdf",
            ],
        }
    }

    /// Input placeholder for the chat composer.
    pub fn placeholder(self) -> &'static str {
        match self {
            Language::En => "Ask me anything about our system...",
            Language::Es => "Pregúntame cualquier cosa sobre nuestro sistema...",
            Language::Pt => "Pergunte-me qualquer coisa sobre nosso sistema...",
            Language::Fr => "Demandez-moi n'importe quoi sur notre système...",
            Language::De => "Fragen Sie mich alles über unser System...",
            Language::It => "Chiedimi qualsiasi cosa sul nostro sistema...",
            Language::Zh => "询问我们系统的任何问题...",
            Language::Ja => "システムについて何でもお聞きください...",
        }
    }

    /// Console string table for this language.
    pub fn translations(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => &[
                ("nav.chat", "Chat Support"),
                ("nav.documents", "Knowledge Base"),
                ("nav.faq", "FAQ Manager"),
                ("nav.dashboard", "Dashboard"),
                ("nav.systemStatus", "System Status"),
                ("nav.aiEngineOnline", "AI Engine Online"),
                ("chat.title", "Technical Support Chat"),
                ("chat.subtitle", "Get instant help with your technical questions"),
                ("chat.sendHint", "Press Enter to send, Shift+Enter for new line"),
                ("docs.title", "Knowledge Base"),
                ("docs.subtitle", "Manage documents for AI training and support"),
                ("docs.searchPlaceholder", "Search documents..."),
                ("docs.allCategories", "All Categories"),
                ("faq.title", "FAQ Manager"),
                ("faq.subtitle", "Manage frequently asked questions and answers"),
                ("faq.searchPlaceholder", "Search FAQs..."),
                ("dashboard.title", "Dashboard"),
                ("dashboard.subtitle", "Monitor your AI helpdesk performance and analytics"),
            ],
            Language::Es => &[
                ("nav.chat", "Chat de Soporte"),
                ("nav.documents", "Base de Conocimientos"),
                ("nav.faq", "Gestor de FAQ"),
                ("nav.dashboard", "Panel de Control"),
                ("nav.systemStatus", "Estado del Sistema"),
                ("nav.aiEngineOnline", "Motor IA En Línea"),
                ("chat.title", "Chat de Soporte Técnico"),
                ("chat.subtitle", "Obtén ayuda instantánea con tus preguntas técnicas"),
                ("chat.sendHint", "Presiona Enter para enviar, Shift+Enter para nueva línea"),
                ("docs.title", "Base de Conocimientos"),
                ("docs.subtitle", "Gestiona documentos para entrenamiento y soporte IA"),
                ("docs.searchPlaceholder", "Buscar documentos..."),
                ("docs.allCategories", "Todas las Categorías"),
                ("faq.title", "Gestor de FAQ"),
                ("faq.subtitle", "Gestiona preguntas frecuentes y respuestas"),
                ("faq.searchPlaceholder", "Buscar FAQs..."),
                ("dashboard.title", "Panel de Control"),
                ("dashboard.subtitle", "Monitorea el rendimiento y análisis de tu helpdesk IA"),
            ],
            Language::Pt => &[
                ("nav.chat", "Chat de Suporte"),
                ("nav.documents", "Base de Conhecimento"),
                ("nav.faq", "Gerenciador de FAQ"),
                ("nav.dashboard", "Painel"),
                ("nav.systemStatus", "Status do Sistema"),
                ("nav.aiEngineOnline", "Motor IA Online"),
                ("chat.title", "Chat de Suporte Técnico"),
                ("chat.subtitle", "Obtenha ajuda instantânea com suas questões técnicas"),
                ("chat.sendHint", "Pressione Enter para enviar, Shift+Enter para nova linha"),
                ("docs.title", "Base de Conhecimento"),
                ("docs.subtitle", "Gerencie documentos para treinamento e suporte IA"),
                ("docs.searchPlaceholder", "Pesquisar documentos..."),
                ("docs.allCategories", "Todas as Categorias"),
                ("faq.title", "Gerenciador de FAQ"),
                ("faq.subtitle", "Gerencie perguntas frequentes e respostas"),
                ("faq.searchPlaceholder", "Pesquisar FAQs..."),
                ("dashboard.title", "Painel"),
                ("dashboard.subtitle", "Monitore o desempenho e análises do seu helpdesk IA"),
            ],
            Language::Fr => &[
                ("nav.chat", "Chat Support"),
                ("nav.documents", "Base de Connaissances"),
                ("nav.faq", "Gestionnaire FAQ"),
                ("nav.dashboard", "Tableau de Bord"),
                ("nav.systemStatus", "État du Système"),
                ("nav.aiEngineOnline", "Moteur IA En Ligne"),
                ("chat.title", "Chat de Support Technique"),
                ("chat.subtitle", "Obtenez une aide instantanée pour vos questions techniques"),
                ("chat.sendHint", "Appuyez sur Entrée pour envoyer, Shift+Entrée pour nouvelle ligne"),
                ("docs.title", "Base de Connaissances"),
                ("docs.subtitle", "Gérez les documents pour la formation et le support IA"),
                ("docs.searchPlaceholder", "Rechercher documents..."),
                ("docs.allCategories", "Toutes les Catégories"),
                ("faq.title", "Gestionnaire FAQ"),
                ("faq.subtitle", "Gérez les questions fréquemment posées et les réponses"),
                ("faq.searchPlaceholder", "Rechercher FAQs..."),
                ("dashboard.title", "Tableau de Bord"),
                ("dashboard.subtitle", "Surveillez les performances et analyses de votre helpdesk IA"),
            ],
            Language::De => &[
                ("nav.chat", "Chat Support"),
                ("nav.documents", "Wissensdatenbank"),
                ("nav.faq", "FAQ Manager"),
                ("nav.dashboard", "Dashboard"),
                ("nav.systemStatus", "Systemstatus"),
                ("nav.aiEngineOnline", "KI-Engine Online"),
                ("chat.title", "Technischer Support Chat"),
                ("chat.subtitle", "Erhalten Sie sofortige Hilfe bei Ihren technischen Fragen"),
                ("chat.sendHint", "Enter zum Senden, Shift+Enter für neue Zeile"),
                ("docs.title", "Wissensdatenbank"),
                ("docs.subtitle", "Verwalten Sie Dokumente für KI-Training und Support"),
                ("docs.searchPlaceholder", "Dokumente suchen..."),
                ("docs.allCategories", "Alle Kategorien"),
                ("faq.title", "FAQ Manager"),
                ("faq.subtitle", "Verwalten Sie häufig gestellte Fragen und Antworten"),
                ("faq.searchPlaceholder", "FAQs suchen..."),
                ("dashboard.title", "Dashboard"),
                ("dashboard.subtitle", "Überwachen Sie die Leistung und Analysen Ihres KI-Helpdesks"),
            ],
            Language::It => &[
                ("nav.chat", "Chat Supporto"),
                ("nav.documents", "Base di Conoscenza"),
                ("nav.faq", "Gestore FAQ"),
                ("nav.dashboard", "Dashboard"),
                ("nav.systemStatus", "Stato Sistema"),
                ("nav.aiEngineOnline", "Motore IA Online"),
                ("chat.title", "Chat Supporto Tecnico"),
                ("chat.subtitle", "Ottieni aiuto istantaneo per le tue domande tecniche"),
                ("chat.sendHint", "Premi Invio per inviare, Shift+Invio per nuova riga"),
                ("docs.title", "Base di Conoscenza"),
                ("docs.subtitle", "Gestisci documenti per addestramento e supporto AI"),
                ("docs.searchPlaceholder", "Cerca documenti..."),
                ("docs.allCategories", "Tutte le Categorie"),
                ("faq.title", "Gestore FAQ"),
                ("faq.subtitle", "Gestisci domande frequenti e risposte"),
                ("faq.searchPlaceholder", "Cerca FAQ..."),
                ("dashboard.title", "Dashboard"),
                ("dashboard.subtitle", "Monitora le prestazioni e le analisi del tuo helpdesk AI"),
            ],
            Language::Zh => &[
                ("nav.chat", "聊天支持"),
                ("nav.documents", "知识库"),
                ("nav.faq", "FAQ管理器"),
                ("nav.dashboard", "仪表板"),
                ("nav.systemStatus", "系统状态"),
                ("nav.aiEngineOnline", "AI引擎在线"),
                ("chat.title", "技术支持聊天"),
                ("chat.subtitle", "获得技术问题的即时帮助"),
                ("chat.sendHint", "按Enter发送，Shift+Enter换行"),
                ("docs.title", "知识库"),
                ("docs.subtitle", "管理AI训练和支持文档"),
                ("docs.searchPlaceholder", "搜索文档..."),
                ("docs.allCategories", "所有类别"),
                ("faq.title", "FAQ管理器"),
                ("faq.subtitle", "管理常见问题和答案"),
                ("faq.searchPlaceholder", "搜索FAQ..."),
                ("dashboard.title", "仪表板"),
                ("dashboard.subtitle", "监控您的AI帮助台性能和分析"),
            ],
            Language::Ja => &[
                ("nav.chat", "チャットサポート"),
                ("nav.documents", "ナレッジベース"),
                ("nav.faq", "FAQマネージャー"),
                ("nav.dashboard", "ダッシュボード"),
                ("nav.systemStatus", "システム状態"),
                ("nav.aiEngineOnline", "AIエンジンオンライン"),
                ("chat.title", "テクニカルサポートチャット"),
                ("chat.subtitle", "技術的な質問に対する即座のヘルプを取得"),
                ("chat.sendHint", "Enterで送信、Shift+Enterで改行"),
                ("docs.title", "ナレッジベース"),
                ("docs.subtitle", "AIトレーニングとサポート用ドキュメントを管理"),
                ("docs.searchPlaceholder", "ドキュメントを検索..."),
                ("docs.allCategories", "すべてのカテゴリ"),
                ("faq.title", "FAQマネージャー"),
                ("faq.subtitle", "よくある質問と回答を管理"),
                ("faq.searchPlaceholder", "FAQを検索..."),
                ("dashboard.title", "ダッシュボード"),
                ("dashboard.subtitle", "AIヘルプデスクのパフォーマンスと分析を監視"),
            ],
        }
    }

    /// Look up a console string by key.
    pub fn translate(self, key: &str) -> Option<&'static str> {
        self.translations()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known() {
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("es"), Language::Es);
        assert_eq!(Language::from_code("pt"), Language::Pt);
        assert_eq!(Language::from_code("fr"), Language::Fr);
        assert_eq!(Language::from_code("de"), Language::De);
        assert_eq!(Language::from_code("it"), Language::It);
        assert_eq!(Language::from_code("zh"), Language::Zh);
        assert_eq!(Language::from_code("ja"), Language::Ja);
    }

    #[test]
    fn test_from_code_unknown_falls_back_to_english() {
        assert_eq!(Language::from_code("xx"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
        assert_eq!(Language::from_code("EN"), Language::En);
    }

    #[test]
    fn test_code_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_all_contains_eight_languages() {
        assert_eq!(Language::ALL.len(), 8);
    }

    #[test]
    fn test_every_language_has_complete_tables() {
        for lang in Language::ALL {
            assert!(!lang.name().is_empty());
            assert!(!lang.flag().is_empty());
            assert!(!lang.system_prompt().is_empty());
            assert!(!lang.greeting().is_empty());
            assert!(!lang.follow_up().is_empty());
            assert!(!lang.placeholder().is_empty());
            assert!(lang.openers().iter().all(|o| !o.is_empty()));
            assert!(lang.knowledge_base().iter().all(|d| !d.is_empty()));
        }
    }

    #[test]
    fn test_greetings_differ_across_languages() {
        assert_ne!(Language::En.greeting(), Language::Es.greeting());
        assert_ne!(Language::Fr.greeting(), Language::De.greeting());
        assert_ne!(Language::Zh.greeting(), Language::Ja.greeting());
    }

    #[test]
    fn test_follow_up_is_a_tips_block() {
        for lang in Language::ALL {
            assert!(lang.follow_up().contains('•'));
            assert!(lang.follow_up().contains("\n\n"));
        }
    }

    #[test]
    fn test_english_knowledge_base_order() {
        let docs = Language::En.knowledge_base();
        assert_eq!(docs[0], "Installation Guide.pdf");
        assert_eq!(docs[1], "API Documentation.html");
        assert_eq!(docs[2], "Troubleshooting FAQ.md");
        assert_eq!(docs[3], "Configuration Manual.pdf");
        assert_eq!(docs[4], "Security Best Practices.pdf");
    }

    #[test]
    fn test_translate_known_key() {
        assert_eq!(Language::En.translate("nav.chat"), Some("Chat Support"));
        assert_eq!(Language::Es.translate("nav.chat"), Some("Chat de Soporte"));
    }

    #[test]
    fn test_translate_unknown_key() {
        assert_eq!(Language::En.translate("nav.doesNotExist"), None);
    }

    #[test]
    fn test_translations_same_keys_everywhere() {
        let english_keys: Vec<&str> = Language::En
            .translations()
            .iter()
            .map(|(k, _)| *k)
            .collect();
        for lang in Language::ALL {
            let keys: Vec<&str> = lang.translations().iter().map(|(k, _)| *k).collect();
            assert_eq!(keys, english_keys, "key set mismatch for {:?}", lang);
        }
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&Language::Ja).unwrap();
        assert_eq!(json, "\"ja\"");
        let back: Language = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(back, Language::De);
    }
}
