use indoc::indoc;

pub(crate) const SUMMARY_SYSTEM: &str = "你是一个专业的文章摘要助手。请对用户提供的文章和图片进行摘要，提取核心观点和关键信息。输出格式：1. 一句话总结 2. 核心观点（3-5条） 3. 关键信息";

pub(crate) const SUMMARY_IMAGES_ONLY: &str = "请对图片中的内容进行摘要，提取核心观点和关键信息。";

pub(crate) const KEYWORD_SYSTEM: &str = "你是一个专业的内容提取助手。你的任务是从用户提供的文章、文档或图片中，精确提取与指定关键词相关的所有内容。提取时要保持原文的完整性和准确性。";

pub(crate) const BOOK_NOTE_SYSTEM: &str = "你是一个专业的读书笔记助手。";

pub(crate) const BOOK_NOTE_IMAGES_ONLY: &str = "请根据图片中的书籍内容生成读书笔记。";

pub(crate) const BOOK_NOTE_COMPLETE: &str = indoc! {"
    请对这本书/内容进行完整总结，包括：
    1. 书籍概述（一段话介绍）
    2. 核心主题和论点
    3. 主要章节/部分内容概要
    4. 作者的核心观点
    5. 书中的重要概念和术语
    6. 总结与评价"};

pub(crate) const BOOK_NOTE_KEYPOINTS: &str = indoc! {"
    请提炼这本书/内容的核心要点：
    1. 一句话概括全书主旨
    2. 5-10个核心要点（每个要点用1-2句话说明）
    3. 最重要的3个观点
    4. 值得记住的金句"};

pub(crate) const BOOK_NOTE_MINDMAP: &str = indoc! {"
    请用 Markdown 格式的思维导图整理这本书/内容的结构。
    严格按照以下格式输出，使用 # 表示层级：

    # 书名/主题
    ## 主要分支1
    ### 子分支1.1
    ### 子分支1.2
    ## 主要分支2
    ### 子分支2.1
    ### 子分支2.2

    注意：
    1. 必须使用 Markdown 标题格式（# ## ### ####）
    2. 每个节点单独一行
    3. 内容要简洁，每个节点不超过15个字
    4. 层级不要超过4层"};

pub(crate) const BOOK_NOTE_ACTIONABLE: &str = indoc! {"
    请从这本书/内容中提取可执行的行动清单：
    1. 立即可以做的事情（3-5项）
    2. 需要培养的习惯（3-5项）
    3. 需要改变的思维方式
    4. 推荐的下一步学习资源
    5. 30天行动计划建议"};

pub(crate) const PDF_INSTRUCTION: &str = "请提取这个PDF文档的全部文字内容，保持原有的段落结构。只输出文字内容，不要添加任何解释或总结。";

pub(crate) const TRANSCRIBE_PLAIN: &str = "请仔细听这段音频，将其中的语音内容完整转录为文字。直接输出转录内容，不要添加任何解释。";

pub(crate) const TRANSCRIBE_WITH_SPEAKERS: &str = indoc! {"
    请转录这段音频的语音内容，并根据声音特征区分说话人。

    格式要求：
    - 每句话前标注说话人，格式为\"【说话人X】：\"
    - 第一个说话的人标为\"【主持人】：\"
    - 其他不同声音的人依次标为\"【角色1】：\"、\"【角色2】：\"等
    - 同一人连续说话只需标注一次
    - 如果只有一个人说话，也要标注为\"【主持人】：\"

    示例输出：
    【主持人】：大家好，欢迎收看今天的节目。
    【角色1】：谢谢主持人，很高兴来到这里。
    【主持人】：那我们开始今天的话题吧。

    请直接输出转录内容："};

pub(crate) const VOICE_SUMMARY_SYSTEM: &str = "你是一个专业的语音内容分析助手。";

pub(crate) const VOICE_MEETING: &str = indoc! {"
    请将以下会议录音转录内容整理为完整的会议纪要：

    【会议纪要格式】
    一、会议基本信息
    - 会议主题：（根据内容推断）
    - 参会人员：（根据角色标记识别）

    二、会议议程与讨论内容
    （按讨论顺序整理各议题）

    三、主要决议与结论
    （列出达成的共识和决定）

    四、待办事项
    | 序号 | 任务内容 | 负责人 | 截止时间 |
    （如有提及）

    五、下一步计划
    （后续安排）

    请根据实际内容填写，没有的项目可以省略。"};

pub(crate) const VOICE_KEYPOINTS: &str = indoc! {"
    请从以下会议内容中提取核心要点：
    1. 会议主要议题
    2. 关键讨论点（按重要性排序）
    3. 重要数据或结论
    4. 需要关注的问题"};

pub(crate) const VOICE_TODO: &str = indoc! {"
    请从以下会议内容中提取所有待办事项：
    1. 任务描述
    2. 负责人（如有提及）
    3. 截止时间（如有提及）
    4. 优先级（根据上下文判断）

    请按优先级排序输出。"};

pub(crate) const VOICE_DECISION: &str = indoc! {"
    请从以下会议内容中提取所有决策记录：
    1. 决策事项
    2. 决策结果
    3. 决策依据或背景
    4. 相关责任人

    请按讨论顺序整理。"};
